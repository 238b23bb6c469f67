//! Chinook Tour - Main entry point.
//!
//! Runs the lesson named on the command line against the Chinook sample
//! database and exits non-zero when it fails.

use chinook_tour::config::Config;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        subscriber.with(fmt::layer().json()).init();
    } else {
        subscriber
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    init_tracing(&config);

    info!(
        lesson = config.lesson.name(),
        "Starting Chinook tour v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = config.lesson.run(&config.database_config()).await {
        error!(error = %e, lesson = config.lesson.name(), "Lesson failed");
        return Err(e.into());
    }

    Ok(())
}
