//! Address Book - Main entry point
//!
//! Reads commands from stdin, writes results to stdout and error lines to stderr.

use address_book::{run_session, CommandProcessor, Config, LineTerminal};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only so stdout carries nothing but command output)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut processor = CommandProcessor::new();
    let mut terminal = LineTerminal::stdio(&config);

    let summary = run_session(&mut processor, &mut terminal)?;

    info!("Address book shutdown complete ({})", summary);
    Ok(())
}
