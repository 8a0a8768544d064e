//! Client configuration.
//!
//! Read once at startup by `hydrate()`. Everything has a default, so a missing
//! or unreadable setting never blocks the app from mounting.

use log::Level;

use crate::util::storage;

/// `localStorage` key holding an optional log level override.
pub const LOG_LEVEL_STORAGE_KEY: &str = "portal_log_level";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;
pub const DEFAULT_TITLE_SUFFIX: &str = "Portal";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid log level '{0}' (expected error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Console logger threshold.
    pub log_level: Level,
    /// Appended to every document title.
    pub title_suffix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { log_level: DEFAULT_LOG_LEVEL, title_suffix: DEFAULT_TITLE_SUFFIX.to_owned() }
    }
}

impl AppConfig {
    /// Build config from browser storage.
    ///
    /// Optional:
    /// - `portal_log_level`: `error`, `warn`, `info` (default), `debug` or `trace`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] when the stored level is not recognised.
    pub fn load() -> Result<Self, ConfigError> {
        let log_level = parse_log_level(storage::read_item(LOG_LEVEL_STORAGE_KEY).as_deref())?;
        Ok(Self { log_level, ..Self::default() })
    }
}

/// Parse a log level name, case-insensitively. `None` yields the default.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLogLevel`] for unknown names.
pub fn parse_log_level(raw: Option<&str>) -> Result<Level, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    raw.trim().parse::<Level>().map_err(|_| ConfigError::InvalidLogLevel(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
