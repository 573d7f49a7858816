use crate::error::{StorageError, StorageResult};
use async_trait::async_trait;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use s3wire_core::ObjectCoordinate;
use std::time::Duration;
use tracing::debug;

/// The storage backend as the pipeline sees it: an opaque signer of
/// time-bounded, single-verb URLs plus an existence probe.
///
/// A presigned URL grants exactly one verb on exactly one object for a
/// bounded time, which keeps the blast radius of a leaked link small
/// compared to broader IAM delegation.
#[async_trait]
pub trait ObjectSigner: Send + Sync + 'static {
    /// Checks whether the object at `coordinate` exists.
    ///
    /// A not-found response is `Ok(false)`; any other backend fault
    /// propagates and aborts the flow.
    async fn exists(&self, coordinate: &ObjectCoordinate) -> StorageResult<bool>;

    /// Returns a URL valid for one GET of `coordinate`, expiring
    /// `ttl_secs` after the call.
    async fn presign_get(&self, coordinate: &ObjectCoordinate, ttl_secs: u64)
        -> StorageResult<String>;

    /// Returns a URL valid for one PUT to `coordinate`, expiring
    /// `ttl_secs` after the call.
    ///
    /// Simple presigning carries only method + path + expiry; size and
    /// content-type constraints cannot be embedded and stay advisory.
    async fn presign_put(&self, coordinate: &ObjectCoordinate, ttl_secs: u64)
        -> StorageResult<String>;
}

/// `ObjectSigner` backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct S3ObjectSigner {
    client: Client,
}

impl S3ObjectSigner {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn presigning_config(ttl_secs: u64) -> StorageResult<PresigningConfig> {
        PresigningConfig::expires_in(Duration::from_secs(ttl_secs))
            .map_err(|e| StorageError::Signing(e.to_string()))
    }
}

#[async_trait]
impl ObjectSigner for S3ObjectSigner {
    async fn exists(&self, coordinate: &ObjectCoordinate) -> StorageResult<bool> {
        debug!(object = %coordinate, "checking source object");

        let result = self
            .client
            .head_object()
            .bucket(&coordinate.bucket)
            .key(&coordinate.key)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(SdkError::ServiceError(err)) if matches!(err.err(), HeadObjectError::NotFound(_)) => {
                Ok(false)
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn presign_get(
        &self,
        coordinate: &ObjectCoordinate,
        ttl_secs: u64,
    ) -> StorageResult<String> {
        debug!(object = %coordinate, ttl_secs, "presigning GET");

        let presigned = self
            .client
            .get_object()
            .bucket(&coordinate.bucket)
            .key(&coordinate.key)
            .presigned(Self::presigning_config(ttl_secs)?)
            .await
            .map_err(|e| StorageError::Signing(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }

    async fn presign_put(
        &self,
        coordinate: &ObjectCoordinate,
        ttl_secs: u64,
    ) -> StorageResult<String> {
        debug!(object = %coordinate, ttl_secs, "presigning PUT");

        let presigned = self
            .client
            .put_object()
            .bucket(&coordinate.bucket)
            .key(&coordinate.key)
            .presigned(Self::presigning_config(ttl_secs)?)
            .await
            .map_err(|e| StorageError::Signing(e.to_string()))?;

        Ok(presigned.uri().to_string())
    }
}
