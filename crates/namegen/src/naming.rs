//! Name composition through the string-generation port.

use std::sync::Arc;

use crate::ports::StringGenerator;

/// Composes Kubernetes-style names by appending a generated suffix.
pub struct NameGenerator {
    generator: Arc<dyn StringGenerator>,
}

impl NameGenerator {
    pub fn new(generator: Arc<dyn StringGenerator>) -> Self {
        Self { generator }
    }

    /// Build `{base}-{suffix}` from the base name and a generated suffix.
    pub fn generate_name(&self, base_name: &str) -> String {
        let suffix = self.generator.generate();
        format!("{base_name}-{suffix}")
    }
}
