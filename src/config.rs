//! Application configuration.
//!
//! Read from the process environment after `dotenvy` has loaded an optional
//! `.env` file. Every key has a default, so an empty environment is valid.
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::view::ViewKind;

pub const LOG_KEY: &str = "GESTIONALE_LOG";
pub const RETENTION_KEY: &str = "GESTIONALE_RETENTION";
pub const START_VIEW_KEY: &str = "GESTIONALE_START_VIEW";

const DEFAULT_LOG_FILTER: &str = "warn,gestionale=info";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// What happens to a view's records when the user navigates away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Retention {
    /// Keep every view's store for the whole session
    #[default]
    Retain,
    /// Drop the store of the view being left
    Discard,
}

impl FromStr for Retention {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(Self::Retain),
            "discard" => Ok(Self::Discard),
            _ => Err(ConfigError::Invalid {
                key: RETENTION_KEY,
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Retain => f.write_str("retain"),
            Self::Discard => f.write_str("discard"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub retention: Retention,
    pub start_view: ViewKind,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            retention: Retention::default(),
            start_view: ViewKind::Tasks,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup(LOG_KEY)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let retention = match lookup(RETENTION_KEY) {
            Some(value) => value.parse()?,
            None => defaults.retention,
        };

        let start_view = match lookup(START_VIEW_KEY) {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: START_VIEW_KEY,
                value,
            })?,
            None => defaults.start_view,
        };

        Ok(Self {
            log_filter,
            retention,
            start_view,
        })
    }
}
