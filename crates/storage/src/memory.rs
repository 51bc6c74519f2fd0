//! In-memory blob store for tests and local development

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::BlobError;
use crate::key::BlobKey;
use crate::store::BlobStore;

const URL_SCHEME: &str = "memory://";

/// Map-backed [`BlobStore`] with per-operation call counters.
///
/// The counters let workflow tests assert which remote calls happened (and,
/// just as importantly, which did not). URLs take the form `memory://{key}`.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, (Bytes, String)>>,
    put_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    list_calls: AtomicUsize,
    /// When set, the next `put` fails with `BlobError::Upload`.
    fail_next_put: AtomicUsize,
    /// When set, the next `delete` fails with `BlobError::Delete`.
    fail_next_delete: AtomicUsize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_calls(&self) -> usize {
        self.put_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of blobs currently stored.
    pub fn len(&self) -> usize {
        self.blobs.lock().expect("blob map lock").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a URL currently resolves to a stored blob.
    pub fn contains(&self, url: &str) -> bool {
        match key_of(url) {
            Ok(key) => self.blobs.lock().expect("blob map lock").contains_key(&key),
            Err(_) => false,
        }
    }

    /// Make the next `put` call fail, for partial-failure tests.
    pub fn fail_next_put(&self) {
        self.fail_next_put.store(1, Ordering::SeqCst);
    }

    /// Make the next `delete` call fail, for partial-failure tests.
    pub fn fail_next_delete(&self) {
        self.fail_next_delete.store(1, Ordering::SeqCst);
    }
}

fn key_of(url: &str) -> Result<String, BlobError> {
    url.strip_prefix(URL_SCHEME)
        .map(str::to_string)
        .ok_or_else(|| BlobError::InvalidUrl(url.to_string()))
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        key: &BlobKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, BlobError> {
        self.put_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_put.swap(0, Ordering::SeqCst) != 0 {
            return Err(BlobError::Upload("injected upload failure".to_string()));
        }

        let url = format!("{URL_SCHEME}{key}");
        self.blobs
            .lock()
            .expect("blob map lock")
            .insert(key.as_str().to_string(), (data, content_type.to_string()));
        Ok(url)
    }

    async fn fetch(&self, url: &str) -> Result<Bytes, BlobError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let key = key_of(url)?;
        self.blobs
            .lock()
            .expect("blob map lock")
            .get(&key)
            .map(|(data, _)| data.clone())
            .ok_or_else(|| BlobError::NotFound(url.to_string()))
    }

    async fn delete(&self, url: &str) -> Result<(), BlobError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_delete.swap(0, Ordering::SeqCst) != 0 {
            return Err(BlobError::Delete("injected delete failure".to_string()));
        }

        let key = key_of(url)?;
        self.blobs
            .lock()
            .expect("blob map lock")
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| BlobError::NotFound(url.to_string()))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let blobs = self.blobs.lock().expect("blob map lock");
        let mut urls: Vec<String> = blobs
            .keys()
            .filter(|key| key.starts_with(&format!("{prefix}/")))
            .map(|key| format!("{URL_SCHEME}{key}"))
            .collect();
        urls.sort();
        Ok(urls)
    }
}
