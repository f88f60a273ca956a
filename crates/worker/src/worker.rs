//! Work execution through the sleeper port.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::Sleeper;

/// How long one unit of work takes.
pub const WORK_DURATION: Duration = Duration::from_secs(2);

/// Signal returned when a unit of work has finished.
pub const WORK_DONE: &str = "done";

/// Performs work that takes time, suspending through the injected port.
pub struct Worker {
    sleeper: Arc<dyn Sleeper>,
}

impl Worker {
    pub fn new(sleeper: Arc<dyn Sleeper>) -> Self {
        Self { sleeper }
    }

    /// Run one unit of work: announce, suspend for [`WORK_DURATION`], report.
    pub async fn do_work(&self) -> &'static str {
        println!("Starting work...");
        self.sleeper.sleep(WORK_DURATION).await;
        println!("Work complete!");
        WORK_DONE
    }
}
