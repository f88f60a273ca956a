//! String generator implementations.

use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::StringGenerator;

/// Alphabet generated suffixes are drawn from.
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated suffixes.
const SUFFIX_LEN: usize = 5;

/// Random suffixes - seeded from the wall clock at construction.
pub struct RandomStringGenerator {
    rng: Mutex<StdRng>,
}

impl RandomStringGenerator {
    /// Create a generator seeded from the current wall-clock time.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(nanos)
    }

    fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomStringGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringGenerator for RandomStringGenerator {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        (0..SUFFIX_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
                SUFFIX_CHARSET[idx] as char
            })
            .collect()
    }
}

/// Fixed suffixes for testing.
#[cfg(test)]
pub struct FixedStringGenerator(pub &'static str);

#[cfg(test)]
impl StringGenerator for FixedStringGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}
