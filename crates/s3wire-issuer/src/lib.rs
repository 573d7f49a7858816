//! The link issuance pipeline.
//!
//! One generic pipeline serves both flows: generate a short id, verify the
//! source for downloads, presign with the flow's verb, render the flow's
//! landing page, publish it under the id-keyed path, and compose the
//! shareable URL. The hosting store is the only durable holder of link
//! state; nothing is kept in the issuing process after publish.

pub mod error;
pub mod issuer;
pub mod page;
pub mod params;

pub use error::IssueError;
pub use issuer::{IssuedLink, LinkIssuer};
pub use params::{
    AdvisoryConstraints, DownloadParams, SiteConfig, UploadParams, DEFAULT_ALLOWED_TYPES,
    DEFAULT_DOWNLOAD_TTL_SECS, DEFAULT_MAX_SIZE_BYTES, DEFAULT_UPLOAD_TTL_SECS,
};
