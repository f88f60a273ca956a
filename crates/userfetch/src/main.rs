//! Userfetch demo - Main entry point.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seams_userfetch::http::ReqwestHttp;
use seams_userfetch::users::get_user;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seams_userfetch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = ReqwestHttp::new();
    match get_user(&client, 1).await {
        Ok(user) => println!("User: {}", user.name),
        Err(err) => println!("Error: {err}"),
    }
}
