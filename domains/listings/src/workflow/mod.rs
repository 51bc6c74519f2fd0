//! Listing workflows: the blob-then-row save chains
//!
//! Every mutation follows the same ordering. Validation runs first and makes
//! no remote calls. Uploads happen before the row write so a stored listing
//! never points at a missing image; when the row write fails after an upload,
//! the fresh blob is deleted as compensation. Old-blob deletes on edit and
//! delete are best-effort: failures are logged and the row operation still
//! proceeds, and `sweep_orphans` reclaims whatever that leaves behind.

pub mod session;

pub use session::EditorSession;

use std::sync::Arc;

use bytes::Bytes;
use tracing::warn;
use uuid::Uuid;

use hawker_common::{Error, Result};
use hawker_storage::{BlobKey, BlobStore};

use crate::domain::entities::{Listing, ListingDraft, ListingKind};
use crate::repository::{ListingFilter, ListingRepository};

/// An image received from a client, ready to upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub data: Bytes,
    pub content_type: String,
}

/// Orchestrates listing mutations against the repository and blob store
#[derive(Clone)]
pub struct ListingWorkflow {
    repo: Arc<dyn ListingRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl ListingWorkflow {
    pub fn new(repo: Arc<dyn ListingRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { repo, blobs }
    }

    /// Create a listing: validate, upload the image, insert the row.
    ///
    /// If the insert fails after a successful upload, the fresh blob is
    /// deleted so the bucket does not accumulate unreferenced images.
    pub async fn create(
        &self,
        kind: ListingKind,
        seller_id: Uuid,
        draft: ListingDraft,
        image: ImageUpload,
    ) -> Result<Listing> {
        draft.validate(kind)?;

        let key = BlobKey::generate(kind.storage_prefix())?;
        let image_url = self
            .blobs
            .put(&key, image.data, &image.content_type)
            .await?;

        let listing = Listing::new(kind, seller_id, draft, image_url.clone());
        match self.repo.create(&listing).await {
            Ok(created) => Ok(created),
            Err(err) => {
                if let Err(cleanup_err) = self.blobs.delete(&image_url).await {
                    warn!(url = %image_url, error = %cleanup_err, "failed to clean up image after create failure");
                }
                Err(err)
            }
        }
    }

    /// Update a listing owned by `seller_id`. When `image` is present the
    /// new blob is uploaded (and the old one deleted, best-effort) before
    /// the row write; when absent the stored image reference is kept and no
    /// storage call is made.
    pub async fn update(
        &self,
        id: Uuid,
        seller_id: Uuid,
        draft: ListingDraft,
        image: Option<ImageUpload>,
    ) -> Result<Listing> {
        let existing = self.require_owned(id, seller_id).await?;
        draft.validate(existing.kind)?;

        let new_image_url = match image {
            Some(image) => {
                // Remove the superseded blob first; an orphaned old image is
                // recoverable by the sweep, a row pointing at nothing is not.
                if let Err(err) = self.blobs.delete(&existing.image_url).await {
                    warn!(url = %existing.image_url, error = %err, "failed to delete replaced image, leaving for sweep");
                }
                let key = BlobKey::generate(existing.kind.storage_prefix())?;
                Some(self.blobs.put(&key, image.data, &image.content_type).await?)
            }
            None => None,
        };

        let patch = draft.into_patch(existing.kind, new_image_url.clone());
        match self.repo.update(id, &patch).await {
            Ok(Some(updated)) => Ok(updated),
            outcome => {
                // Row vanished or the write failed; either way nothing
                // references the fresh blob, so compensate it away.
                if let Some(url) = new_image_url {
                    if let Err(cleanup_err) = self.blobs.delete(&url).await {
                        warn!(url = %url, error = %cleanup_err, "failed to clean up image after update failure");
                    }
                }
                match outcome {
                    Err(err) => Err(err),
                    _ => Err(Error::NotFound("Listing not found".to_string())),
                }
            }
        }
    }

    /// Delete a listing owned by `seller_id` along with its image. A failed
    /// image delete is logged and does not block the row delete.
    pub async fn delete(&self, id: Uuid, seller_id: Uuid) -> Result<()> {
        let existing = self.require_owned(id, seller_id).await?;

        if let Err(err) = self.blobs.delete(&existing.image_url).await {
            warn!(url = %existing.image_url, error = %err, "failed to delete listing image, leaving for sweep");
        }

        self.repo.delete(id).await?;

        Ok(())
    }

    /// Delete stored blobs no listing references. Run at startup to reclaim
    /// images left behind by tolerated delete failures or crashes between
    /// upload and insert. Returns the number of blobs removed.
    pub async fn sweep_orphans(&self) -> Result<usize> {
        let listings = self.repo.list(ListingFilter::default()).await?;
        let referenced: std::collections::HashSet<&str> =
            listings.iter().map(|l| l.image_url.as_str()).collect();

        let mut removed = 0;
        for prefix in [
            ListingKind::Event.storage_prefix(),
            ListingKind::Product.storage_prefix(),
        ] {
            for url in self.blobs.list(prefix).await? {
                if referenced.contains(url.as_str()) {
                    continue;
                }
                match self.blobs.delete(&url).await {
                    Ok(()) => removed += 1,
                    Err(err) => {
                        warn!(url = %url, error = %err, "failed to sweep orphaned blob")
                    }
                }
            }
        }

        Ok(removed)
    }

    /// Load a listing and check ownership. Foreign and missing listings both
    /// come back as NotFound so callers cannot probe for other sellers' IDs.
    async fn require_owned(&self, id: Uuid, seller_id: Uuid) -> Result<Listing> {
        let listing = self
            .repo
            .find(id)
            .await?
            .ok_or_else(|| Error::NotFound("Listing not found".to_string()))?;
        if listing.seller_id != seller_id {
            return Err(Error::NotFound("Listing not found".to_string()));
        }

        Ok(listing)
    }
}
