//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is loaded if present.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// How many days ahead `birthdays` looks (default: 7)
    pub birthday_window_days: u32,

    /// Maximum number of `search` results to show (default: 5)
    pub max_search_results: usize,

    /// Fuzzy search confidence threshold (0-100, default: 30)
    pub search_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Birthday look-ahead in days, 1-366 (default: 7)
    /// - `MAX_SEARCH_RESULTS`: Max search results (default: 5)
    /// - `SEARCH_CONFIDENCE_THRESHOLD`: Min search confidence, 0-100 (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy never prints to stdout; a missing file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let birthday_window_days =
            Self::parse_env("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if !(1..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let max_search_results =
            Self::parse_env("MAX_SEARCH_RESULTS", defaults.max_search_results)?;
        if max_search_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_SEARCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let search_confidence_threshold = Self::parse_env(
            "SEARCH_CONFIDENCE_THRESHOLD",
            defaults.search_confidence_threshold,
        )?;
        if search_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            birthday_window_days,
            max_search_results,
            search_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T: FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            max_search_results: 5,
            search_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
