//! In-memory listing repository for tests
//!
//! Tracks call counts and supports one-shot failure injection so workflow
//! tests can assert exactly which persistence calls were made and exercise
//! the compensation paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use hawker_common::{Error, Result};

use crate::domain::entities::{Listing, ListingPatch};
use crate::repository::{ListingFilter, ListingRepository};

#[derive(Default)]
pub struct MemoryListingRepository {
    listings: Mutex<HashMap<Uuid, Listing>>,
    pub list_calls: AtomicUsize,
    pub find_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    fail_next_create: AtomicBool,
    fail_next_update: AtomicBool,
    fail_next_delete: AtomicBool,
    miss_next_update: AtomicBool,
}

impl MemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next create call fail once
    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }

    /// Make the next update call fail once
    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }

    /// Make the next delete call fail once
    pub fn fail_next_delete(&self) {
        self.fail_next_delete.store(true, Ordering::SeqCst);
    }

    /// Make the next update call find no row once, as if the listing was
    /// deleted between the caller's read and its write
    pub fn miss_next_update(&self) {
        self.miss_next_update.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.listings.lock().unwrap().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.listings.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seed a listing directly, bypassing call counters
    pub fn insert(&self, listing: Listing) {
        self.listings.lock().unwrap().insert(listing.id, listing);
    }
}

#[async_trait]
impl ListingRepository for MemoryListingRepository {
    async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let mut listings: Vec<Listing> = self
            .listings
            .lock()
            .unwrap()
            .values()
            .filter(|l| filter.kind.map_or(true, |k| l.kind == k))
            .filter(|l| filter.seller_id.map_or(true, |s| l.seller_id == s))
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(listings)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Listing>> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.listings.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, listing: &Listing) -> Result<Listing> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(Error::Internal("injected create failure".to_string()));
        }
        self.listings
            .lock()
            .unwrap()
            .insert(listing.id, listing.clone());

        Ok(listing.clone())
    }

    async fn update(&self, id: Uuid, patch: &ListingPatch) -> Result<Option<Listing>> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(Error::Internal("injected update failure".to_string()));
        }
        if self.miss_next_update.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        let mut listings = self.listings.lock().unwrap();
        let Some(listing) = listings.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(listing);

        Ok(Some(listing.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_next_delete.swap(false, Ordering::SeqCst) {
            return Err(Error::Internal("injected delete failure".to_string()));
        }

        Ok(self.listings.lock().unwrap().remove(&id).is_some())
    }
}
