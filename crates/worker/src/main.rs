//! Worker demo - Main entry point.

use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seams_worker::sleeper::TokioSleeper;
use seams_worker::worker::Worker;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seams_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let started = Instant::now();
    println!("Started at: {}", Local::now().format("%H:%M:%S"));

    let worker = Worker::new(Arc::new(TokioSleeper::new()));
    let signal = worker.do_work().await;
    tracing::debug!(signal, "work finished");

    println!("Finished at: {}", Local::now().format("%H:%M:%S"));
    println!("Duration: {:?}", started.elapsed());
}
