//! Teamgate - team access control service

#![allow(missing_docs)]

use std::process::ExitCode;
use teamgate::server;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    match server::builder::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
