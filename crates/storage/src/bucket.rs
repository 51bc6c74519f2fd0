//! Bucket-HTTP blob store
//!
//! Talks to a Supabase-style storage API:
//! - `POST   {base}/object/{bucket}/{key}` uploads an object
//! - `GET    {base}/object/public/{bucket}/{key}` is the durable public URL
//! - `DELETE {base}/object/{bucket}/{key}` removes an object
//! - `POST   {base}/object/list/{bucket}` lists objects under a prefix

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::error::BlobError;
use crate::key::BlobKey;
use crate::store::BlobStore;

/// Production [`BlobStore`] backed by the bucket HTTP API.
#[derive(Clone)]
pub struct BucketHttpStore {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

#[derive(Serialize)]
struct ListRequest<'a> {
    prefix: &'a str,
    limit: u32,
}

#[derive(Deserialize)]
struct ListedObject {
    name: String,
}

impl BucketHttpStore {
    /// `base_url` is the storage API root, e.g. `https://acme.example.co/storage/v1`.
    pub fn new(base_url: impl Into<String>, bucket: impl Into<String>, service_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bucket: bucket.into(),
            service_key: service_key.into(),
        }
    }

    fn object_endpoint(&self, key: &str) -> String {
        format!("{}/object/{}/{}", self.base_url, self.bucket, key)
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, key)
    }

    /// Resolve the storage key a public URL refers to.
    fn key_of(&self, url: &str) -> Result<String, BlobError> {
        let public_root = format!("{}/object/public/{}/", self.base_url, self.bucket);
        url.strip_prefix(&public_root)
            .filter(|key| !key.is_empty())
            .map(str::to_string)
            .ok_or_else(|| BlobError::InvalidUrl(url.to_string()))
    }
}

#[async_trait]
impl BlobStore for BucketHttpStore {
    async fn put(
        &self,
        key: &BlobKey,
        data: Bytes,
        content_type: &str,
    ) -> Result<String, BlobError> {
        let response = self
            .client
            .post(self.object_endpoint(key.as_str()))
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await
            .map_err(|e| BlobError::Upload(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BlobError::Upload(format!(
                "bucket returned {} for {}",
                response.status(),
                key
            )));
        }

        Ok(self.public_url(key.as_str()))
    }

    async fn fetch(&self, url: &str) -> Result<Bytes, BlobError> {
        // Public URLs are fetchable directly, but go through the key so a
        // foreign URL is rejected instead of proxied.
        let key = self.key_of(url)?;
        let response = self
            .client
            .get(self.public_url(&key))
            .send()
            .await
            .map_err(|e| BlobError::Fetch(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BlobError::NotFound(url.to_string())),
            status if status.is_success() => response
                .bytes()
                .await
                .map_err(|e| BlobError::Fetch(e.to_string())),
            status => Err(BlobError::Fetch(format!("bucket returned {status}"))),
        }
    }

    async fn delete(&self, url: &str) -> Result<(), BlobError> {
        let key = self.key_of(url)?;
        let response = self
            .client
            .delete(self.object_endpoint(&key))
            .bearer_auth(&self.service_key)
            .send()
            .await
            .map_err(|e| BlobError::Delete(e.to_string()))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(BlobError::NotFound(url.to_string())),
            status if status.is_success() => Ok(()),
            status => Err(BlobError::Delete(format!(
                "bucket returned {status} for {key}"
            ))),
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobError> {
        let response = self
            .client
            .post(format!("{}/object/list/{}", self.base_url, self.bucket))
            .bearer_auth(&self.service_key)
            .json(&ListRequest {
                prefix,
                limit: 1000,
            })
            .send()
            .await
            .map_err(|e| BlobError::List(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BlobError::List(format!(
                "bucket returned {}",
                response.status()
            )));
        }

        let objects: Vec<ListedObject> = response
            .json()
            .await
            .map_err(|e| BlobError::List(e.to_string()))?;

        Ok(objects
            .into_iter()
            .map(|o| self.public_url(&format!("{prefix}/{}", o.name)))
            .collect())
    }
}
