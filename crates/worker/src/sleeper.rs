//! Sleeper implementations.

use std::time::Duration;

use async_trait::async_trait;

use crate::ports::Sleeper;

/// Real sleeper - suspends on the tokio timer.
pub struct TokioSleeper;

impl TokioSleeper {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioSleeper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
