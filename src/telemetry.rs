use crate::{Error, Result};

/// Validates that a log level string is valid
pub fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            Error::config(format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            ))
        })?;
    Ok(())
}

/// Installs the JSON tracing subscriber. `RUST_LOG` overrides the configured
/// level; returns the level in effect.
pub fn init(configured_level: &str) -> Result<String> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| configured_level.to_string());

    validate_log_level(&log_level)?;

    let filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to install tracing subscriber: {}", e)))?;

    Ok(log_level)
}
