//! The blob store seam

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::BlobError;
use crate::key::BlobKey;

/// Remote blob storage for listing images.
///
/// Implementations address blobs by generated [`BlobKey`] on write and by the
/// durable URL returned from [`put`](BlobStore::put) everywhere else, so
/// callers never need to know the bucket layout.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload `data` under `key` and return the durable fetch URL.
    async fn put(&self, key: &BlobKey, data: Bytes, content_type: &str)
        -> Result<String, BlobError>;

    /// Retrieve a blob's bytes by its URL.
    async fn fetch(&self, url: &str) -> Result<Bytes, BlobError>;

    /// Delete the blob a URL points at.
    ///
    /// Returns [`BlobError::NotFound`] when the URL resolves to nothing.
    async fn delete(&self, url: &str) -> Result<(), BlobError>;

    /// List the URLs of all blobs stored under `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, BlobError>;
}
