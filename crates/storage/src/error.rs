//! Blob storage error types

use thiserror::Error;

/// Errors from the blob store seam.
///
/// Every variant is remote-call adjacent; callers log the detail and surface
/// only a generic storage error to API clients.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Delete failed: {0}")]
    Delete(String),

    #[error("List failed: {0}")]
    List(String),

    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Invalid blob URL: {0}")]
    InvalidUrl(String),
}

impl From<BlobError> for hawker_common::Error {
    fn from(err: BlobError) -> Self {
        match err {
            BlobError::NotFound(url) => {
                hawker_common::Error::NotFound(format!("Blob not found: {url}"))
            }
            other => hawker_common::Error::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hawker_common::Error;

    #[test]
    fn test_not_found_maps_to_not_found() {
        let err: Error = BlobError::NotFound("memory://x.jpg".to_string()).into();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_upload_maps_to_storage() {
        let err: Error = BlobError::Upload("connection reset".to_string()).into();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(err.error_code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_delete_maps_to_storage() {
        let err: Error = BlobError::Delete("503".to_string()).into();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn test_fetch_maps_to_storage_and_names_the_operation() {
        let err = BlobError::Fetch("connection reset".to_string());
        assert!(err.to_string().starts_with("Fetch failed"));

        let err: Error = err.into();
        assert!(matches!(err, Error::Storage(_)));
    }
}
