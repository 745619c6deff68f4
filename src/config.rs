//! Configuration management for the address book demo.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file read first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const DEFAULT_LOG_LEVEL: &str = "info";

/// Upper bound for the upcoming-birthday window; no countdown exceeds it.
const MAX_UPCOMING_DAYS: u32 = 366;

/// Configuration for the address book demo.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Pretty-print JSON output (default: true)
    pub pretty_json: bool,

    /// Window, in days, for listing upcoming birthdays (default: 7)
    pub upcoming_birthday_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `ADDRESS_BOOK_PRETTY`: Pretty-print JSON, `true`/`false` (default: true)
    /// - `UPCOMING_BIRTHDAY_DAYS`: Upcoming birthday window, 0-366 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or(defaults.log_level);
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), log_level),
            });
        }

        let pretty_json = Self::parse_env_bool("ADDRESS_BOOK_PRETTY", defaults.pretty_json)?;
        let upcoming_birthday_days =
            Self::parse_env_u32("UPCOMING_BIRTHDAY_DAYS", defaults.upcoming_birthday_days)?;

        if upcoming_birthday_days > MAX_UPCOMING_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_UPCOMING_DAYS),
            });
        }

        Ok(Config {
            log_level,
            pretty_json,
            upcoming_birthday_days,
        })
    }

    /// Log level to start logging with, before a config failure can be reported.
    ///
    /// Falls back to the default level when loading failed.
    pub fn startup_log_level(loaded: &ConfigResult<Config>) -> &str {
        match loaded {
            Ok(config) => &config.log_level,
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
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
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            pretty_json: true,
            upcoming_birthday_days: 7,
        }
    }
}
