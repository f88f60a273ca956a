//! Port trait for injecting string generation.

/// Source of generated suffix strings.
///
/// Consumers depend on this trait instead of reaching for a process-global
/// RNG, so tests can substitute a fixed implementation.
pub trait StringGenerator: Send + Sync {
    fn generate(&self) -> String;
}
