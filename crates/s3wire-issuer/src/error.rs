use s3wire_core::{CoreError, ObjectCoordinate};
use s3wire_storage::StorageError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IssueError>;

/// Errors terminating an issuance request.
///
/// All of them are fatal for the invocation; nothing is retried, and a
/// request that fails before publish leaves no page behind.
#[derive(Debug, Error)]
pub enum IssueError {
    /// Download flow only: the source object is absent, so no link that
    /// could ever succeed can be issued. Raised before any signing occurs.
    #[error("source object not found: {0}")]
    SourceMissing(ObjectCoordinate),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Render(#[from] CoreError),
}
