use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tracing::debug;

/// Content type every published page is served with.
pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Caching is disabled on every published page: the embedded signed URL is
/// time-sensitive, and a cached copy could outlive its validity window or
/// keep serving an already-expired link.
pub const CACHE_CONTROL: &str = "no-cache, no-store, must-revalidate";

/// The hosting store as the pipeline sees it: a key-value publish target
/// for rendered pages.
///
/// Publishing to a key that already exists silently overwrites; the short
/// id space is large enough that collisions are accepted, not checked.
#[async_trait]
pub trait PagePublisher: Send + Sync + 'static {
    /// Writes a rendered page under `key`.
    async fn publish(&self, key: &str, page: Vec<u8>) -> StorageResult<()>;
}

/// `PagePublisher` backed by an S3 bucket configured for static web
/// serving.
#[derive(Debug, Clone)]
pub struct S3PagePublisher {
    client: Client,
    bucket: String,
}

impl S3PagePublisher {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl PagePublisher for S3PagePublisher {
    async fn publish(&self, key: &str, page: Vec<u8>) -> StorageResult<()> {
        debug!(bucket = %self.bucket, key = %key, bytes = page.len(), "publishing page");

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(page))
            .content_type(CONTENT_TYPE)
            .cache_control(CACHE_CONTROL)
            .send()
            .await
            .map_err(|e| StorageError::Publish(e.to_string()))?;

        Ok(())
    }
}
