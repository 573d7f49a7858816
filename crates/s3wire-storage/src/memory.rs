use crate::error::StorageResult;
use crate::publisher::PagePublisher;
use crate::signer::ObjectSigner;
use async_trait::async_trait;
use dashmap::DashMap;
use s3wire_core::ObjectCoordinate;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory hosting store for pipeline tests.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    pages: DashMap<String, Vec<u8>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the page published under `key`, if any.
    pub fn page(&self, key: &str) -> Option<Vec<u8>> {
        self.pages.get(key).map(|entry| entry.value().clone())
    }

    /// Number of published pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[async_trait]
impl PagePublisher for InMemoryHost {
    async fn publish(&self, key: &str, page: Vec<u8>) -> StorageResult<()> {
        // Overwrite semantics match the S3 publisher.
        self.pages.insert(key.to_string(), page);
        Ok(())
    }
}

/// Deterministic signer for pipeline tests: a fixed set of existing
/// objects and synthetic signed URLs, with a call counter so tests can
/// assert that a failed flow never reached the signing step.
#[derive(Debug, Default)]
pub struct StaticSigner {
    existing: DashMap<String, ()>,
    presign_calls: AtomicUsize,
}

impl StaticSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an object as present for subsequent `exists` calls.
    pub fn add_object(&self, coordinate: &ObjectCoordinate) {
        self.existing.insert(coordinate.to_string(), ());
    }

    /// Number of presign requests served so far.
    pub fn presign_calls(&self) -> usize {
        self.presign_calls.load(Ordering::SeqCst)
    }

    fn signed_url(&self, verb: &str, coordinate: &ObjectCoordinate, ttl_secs: u64) -> String {
        self.presign_calls.fetch_add(1, Ordering::SeqCst);
        format!(
            "https://{}.s3.test.amazonaws.com/{}?X-Amz-Expires={}&verb={}&X-Amz-Signature=static",
            coordinate.bucket, coordinate.key, ttl_secs, verb
        )
    }
}

#[async_trait]
impl ObjectSigner for StaticSigner {
    async fn exists(&self, coordinate: &ObjectCoordinate) -> StorageResult<bool> {
        Ok(self.existing.contains_key(&coordinate.to_string()))
    }

    async fn presign_get(
        &self,
        coordinate: &ObjectCoordinate,
        ttl_secs: u64,
    ) -> StorageResult<String> {
        Ok(self.signed_url("GET", coordinate, ttl_secs))
    }

    async fn presign_put(
        &self,
        coordinate: &ObjectCoordinate,
        ttl_secs: u64,
    ) -> StorageResult<String> {
        Ok(self.signed_url("PUT", coordinate, ttl_secs))
    }
}
