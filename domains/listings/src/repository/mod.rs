//! Repository layer for the Listings domain

pub mod listings;
pub mod memory;

pub use listings::PgListingRepository;
pub use memory::MemoryListingRepository;

use async_trait::async_trait;
use uuid::Uuid;

use hawker_common::Result;

use crate::domain::entities::{Listing, ListingKind, ListingPatch};

/// Filter for listing queries. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingFilter {
    pub kind: Option<ListingKind>,
    pub seller_id: Option<Uuid>,
}

impl ListingFilter {
    pub fn by_kind(kind: ListingKind) -> Self {
        Self {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn with_seller(mut self, seller_id: Uuid) -> Self {
        self.seller_id = Some(seller_id);
        self
    }
}

/// Persistence seam for listings. The workflow holds this behind
/// `Arc<dyn ListingRepository>` so tests can run against the in-memory
/// implementation.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// List listings matching the filter, newest first
    async fn list(&self, filter: ListingFilter) -> Result<Vec<Listing>>;

    /// Find a listing by ID
    async fn find(&self, id: Uuid) -> Result<Option<Listing>>;

    /// Persist a new listing
    async fn create(&self, listing: &Listing) -> Result<Listing>;

    /// Overwrite a listing's fields, returning the stored row
    async fn update(&self, id: Uuid, patch: &ListingPatch) -> Result<Option<Listing>>;

    /// Delete a listing. Returns whether a row existed.
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
