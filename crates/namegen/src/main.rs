//! Namegen demo - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seams_namegen::naming::NameGenerator;
use seams_namegen::random::RandomStringGenerator;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seams_namegen=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let generator = NameGenerator::new(Arc::new(RandomStringGenerator::new()));
    tracing::debug!("suffix source seeded from wall clock");

    println!("Generated names:");
    println!("  Pod:        {}", generator.generate_name("my-pod"));
    println!("  Deployment: {}", generator.generate_name("nginx-deployment"));
    println!("  Service:    {}", generator.generate_name("api-service"));
}
