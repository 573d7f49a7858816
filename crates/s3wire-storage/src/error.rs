use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the signer and publisher.
///
/// Every variant is terminal for the invocation that hit it: the pipeline
/// never retries and never publishes a page after a failed step.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No usable AWS credentials in the ambient chain.
    #[error(
        "no usable AWS credentials: {0}. configure them with `aws configure`, \
         the standard environment variables, or an instance role"
    )]
    Credentials(String),

    /// The backend rejected or failed a presign request.
    #[error("presign request failed: {0}")]
    Signing(String),

    /// The hosting store rejected the page write.
    #[error("page publish failed: {0}")]
    Publish(String),

    /// Any other backend fault (including faults during existence checks).
    #[error("storage backend error: {0}")]
    Backend(String),
}
