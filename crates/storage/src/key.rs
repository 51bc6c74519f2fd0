//! Blob key generation

use crate::error::BlobError;

/// Storage key for an uploaded image: `{prefix}/{unix_millis}_{random}.jpg`.
///
/// Wall-clock millis plus a random suffix is collision-resistant enough for
/// the low write rate of a single seller session; it is not a general-purpose
/// key scheme and must not be reused for high-frequency concurrent writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobKey(String);

impl BlobKey {
    /// Generate a fresh key under `prefix` (e.g. `events` or `products`).
    pub fn generate(prefix: &str) -> Result<Self, BlobError> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)
            .map_err(|e| BlobError::Upload(format!("key generation failed: {e}")))?;
        let suffix = u64::from_le_bytes(buf);
        let millis = chrono::Utc::now().timestamp_millis();

        Ok(Self(format!("{prefix}/{millis}_{suffix}.jpg")))
    }

    /// Reconstruct a key from its raw path form.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix segment (everything before the first `/`), if any.
    pub fn prefix(&self) -> Option<&str> {
        self.0.split_once('/').map(|(prefix, _)| prefix)
    }
}

impl std::fmt::Display for BlobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_shape() {
        let key = BlobKey::generate("events").unwrap();
        let rest = key
            .as_str()
            .strip_prefix("events/")
            .expect("key starts with prefix");
        let stem = rest.strip_suffix(".jpg").expect("key ends with .jpg");
        let (millis, suffix) = stem.split_once('_').expect("millis_suffix stem");
        assert!(millis.parse::<i64>().is_ok());
        assert!(suffix.parse::<u64>().is_ok());
    }

    #[test]
    fn test_generate_is_unique() {
        let a = BlobKey::generate("products").unwrap();
        let b = BlobKey::generate("products").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_prefix() {
        let key = BlobKey::from_path("products/123_456.jpg");
        assert_eq!(key.prefix(), Some("products"));
        assert_eq!(BlobKey::from_path("bare.jpg").prefix(), None);
    }
}
