//! Demo configuration.

use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;

use crate::error::DemoError;

/// Environment variable overriding the log file path.
pub const LOG_PATH_VAR: &str = "RANGESLIDER_LOG";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_VAR: &str = "RANGESLIDER_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Log file. The terminal owns stdout, so logs never go there.
    pub log_path: PathBuf,
    pub log_level: LevelFilter,
    /// How long to wait for input before redrawing.
    pub tick: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("rangeslider-demo.log"),
            log_level: LevelFilter::Debug,
            tick: Duration::from_millis(50),
        }
    }
}

impl DemoConfig {
    /// Defaults, overridden by environment variables when set.
    pub fn from_env() -> Result<Self, DemoError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DemoError> {
        let mut config = Self::default();

        if let Some(path) = lookup(LOG_PATH_VAR).filter(|p| !p.is_empty()) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = parse_level(&level)?;
        }
        Ok(config)
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, DemoError> {
    level
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| DemoError::InvalidLogLevel(level.to_string()))
}
