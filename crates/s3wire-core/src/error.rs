use thiserror::Error;

/// Errors related to the core link issuance types.
pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid short id: {0}")]
    InvalidShortId(String),
    #[error("template placeholder has no bound value: {0}")]
    UnboundPlaceholder(String),
}
