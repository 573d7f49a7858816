use crate::error::{CoreError, Result};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The 62-symbol alphabet short ids are drawn from.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default number of characters in a generated short id.
pub const DEFAULT_LENGTH: usize = 6;

/// A short random identifier used as the public path component of a link.
///
/// Ids are sampled uniformly, with replacement, from the base62 alphabet.
/// They are not checked for uniqueness against already-published pages: at
/// the default length the id space holds 62^6 (~56.8 billion) values and a
/// collision silently overwrites, which is accepted.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortId(String);

impl ShortId {
    /// Creates a `ShortId` from untrusted input after validating it.
    ///
    /// Valid ids are non-empty and contain only `[a-zA-Z0-9]`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::InvalidShortId("must not be empty".to_string()));
        }
        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidShortId(format!(
                "must contain only base62 characters: '{}'",
                id
            )));
        }
        Ok(Self(id))
    }

    /// Samples a fresh id of `length` characters from the thread-local rng.
    pub fn random(length: usize) -> Self {
        Self::random_with(&mut rand::thread_rng(), length)
    }

    /// Samples a fresh id from the provided rng.
    ///
    /// `Alphanumeric` draws uniformly from exactly the base62 alphabet.
    pub fn random_with(rng: &mut impl Rng, length: usize) -> Self {
        let id = rng
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortId").field(&self.0).finish()
    }
}

impl Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
