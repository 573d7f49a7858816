//! S3-facing side of s3wire.
//!
//! The issuance pipeline only sees two traits: [`ObjectSigner`] (existence
//! checks and presigned single-verb URLs) and [`PagePublisher`] (static
//! page writes to the hosting store). The S3 implementations live here,
//! together with in-memory doubles for tests.

pub mod client;
pub mod error;
pub mod memory;
pub mod publisher;
pub mod signer;

pub use client::load_client;
pub use error::{StorageError, StorageResult};
pub use memory::{InMemoryHost, StaticSigner};
pub use publisher::{PagePublisher, S3PagePublisher, CACHE_CONTROL, CONTENT_TYPE};
pub use signer::{ObjectSigner, S3ObjectSigner};
