use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A (bucket, key) pair identifying one blob in the storage backend.
///
/// For downloads the coordinate must already exist; for uploads it is the
/// destination the link's eventual use will create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCoordinate {
    pub bucket: String,
    pub key: String,
}

impl ObjectCoordinate {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Returns the final path component of the key, used as the display
    /// filename on download pages.
    pub fn filename(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }
}

impl Display for ObjectCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_s3_uri() {
        let coord = ObjectCoordinate::new("docs", "reports/2026/q2.pdf");
        assert_eq!(coord.to_string(), "s3://docs/reports/2026/q2.pdf");
    }

    #[test]
    fn filename_is_last_key_component() {
        assert_eq!(
            ObjectCoordinate::new("docs", "reports/2026/q2.pdf").filename(),
            "q2.pdf"
        );
        assert_eq!(ObjectCoordinate::new("docs", "plain.txt").filename(), "plain.txt");
    }
}
