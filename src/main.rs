//! Assistant Bot - Main entry point
//!
//! Interactive contact manager: reads commands from stdin and answers on
//! stdout. Logs go to stderr so they never mix with the conversation.

use anyhow::Result;
use assistant_bot::services::{ContactService, ServiceOptions};
use assistant_bot::{shell, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid polluting stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting assistant bot (birthday window: {} days)",
        config.birthday_window_days
    );

    let mut service = ContactService::new(ServiceOptions::from(&config));

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = shell::run(&mut service, stdin.lock(), stdout.lock()) {
        error!("Shell terminated with I/O error: {}", e);
        return Err(e.into());
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}
