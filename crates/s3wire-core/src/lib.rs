//! Core types for the s3wire link issuance tool.
//!
//! This crate is pure and synchronous: short identifiers and their
//! generators, object coordinates, share-link and page-path composition,
//! expiry arithmetic, and the placeholder template engine. Everything that
//! talks to a storage backend lives in `s3wire-storage`.

pub mod coordinate;
pub mod error;
pub mod expiry;
pub mod generator;
pub mod link;
pub mod short_id;
pub mod template;

pub use coordinate::ObjectCoordinate;
pub use error::CoreError;
pub use generator::{FixedIdGenerator, IdGenerator, RandomIdGenerator};
pub use link::{page_key, share_url, FlowKind, Protocol};
pub use short_id::ShortId;
pub use template::Template;
