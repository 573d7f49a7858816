use crate::short_id::{ShortId, DEFAULT_LENGTH};
use typed_builder::TypedBuilder;

/// Trait for producing short ids.
///
/// Implementations are pure generators that don't interact with storage;
/// the issuance pipeline performs no collision check against already
/// published ids.
pub trait IdGenerator: Send + Sync + 'static {
    /// Produces the next short id.
    fn generate(&self) -> ShortId;
}

/// The default generator: independent uniform base62 samples per call.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomIdGenerator {
    #[builder(default = DEFAULT_LENGTH)]
    length: usize,
}

impl Default for RandomIdGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> ShortId {
        ShortId::random(self.length)
    }
}

/// A generator that always returns the same id.
///
/// Useful for deterministic pipeline tests and one-off tooling that wants
/// to pin the published path.
#[derive(Debug, Clone)]
pub struct FixedIdGenerator(ShortId);

impl FixedIdGenerator {
    pub fn new(id: ShortId) -> Self {
        Self(id)
    }
}

impl IdGenerator for FixedIdGenerator {
    fn generate(&self) -> ShortId {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_generator_uses_default_length() {
        let generator = RandomIdGenerator::default();
        assert_eq!(generator.generate().as_str().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn random_generator_honors_custom_length() {
        let generator = RandomIdGenerator::builder().length(12).build();
        assert_eq!(generator.generate().as_str().len(), 12);
    }

    #[test]
    fn fixed_generator_repeats_its_id() {
        let generator = FixedIdGenerator::new(ShortId::new("abc123").unwrap());
        assert_eq!(generator.generate().as_str(), "abc123");
        assert_eq!(generator.generate().as_str(), "abc123");
    }
}
