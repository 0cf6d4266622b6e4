//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration only affects logging and how error lines are marked; it never changes
//! command semantics.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `ADDRESS_BOOK_LOG_LEVEL`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the address book command processor.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Text prepended to every error line (default: "Error, ")
    pub error_prefix: String,

    /// Write error lines to stdout instead of stderr (default: false)
    pub errors_to_stdout: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_LOG_LEVEL`: Logging level (default: "error")
    /// - `ADDRESS_BOOK_ERROR_PREFIX`: Error line prefix (default: "Error, ")
    /// - `ADDRESS_BOOK_ERRORS_TO_STDOUT`: `true`/`false` (default: false)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let log_level = env::var("ADDRESS_BOOK_LOG_LEVEL")
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or(defaults.log_level);

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), log_level),
            });
        }

        let error_prefix =
            env::var("ADDRESS_BOOK_ERROR_PREFIX").unwrap_or(defaults.error_prefix);
        let errors_to_stdout =
            Self::parse_env_bool("ADDRESS_BOOK_ERRORS_TO_STDOUT", defaults.errors_to_stdout)?;

        Ok(Config {
            log_level,
            error_prefix,
            errors_to_stdout,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            error_prefix: "Error, ".to_string(),
            errors_to_stdout: false,
        }
    }
}
