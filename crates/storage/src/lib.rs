//! Blob storage adapter for Hawker
//!
//! Listing images live in a remote bucket and are referenced from listing
//! documents by their resolved public URL. This crate owns that seam: the
//! [`BlobStore`] trait, the bucket-HTTP implementation used in production,
//! and an in-memory implementation for tests.

mod bucket;
mod error;
mod key;
mod memory;
mod store;

pub use bucket::BucketHttpStore;
pub use error::BlobError;
pub use key::BlobKey;
pub use memory::MemoryBlobStore;
pub use store::BlobStore;
