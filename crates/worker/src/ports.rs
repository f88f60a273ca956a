//! Port trait for injecting time suspension.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends the current task for a duration.
///
/// Consumers depend on this trait instead of calling the runtime timer
/// directly, so tests can record the requested duration without waiting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
