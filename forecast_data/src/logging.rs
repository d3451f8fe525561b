//! Logging setup
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: standard tracing filter, takes precedence over the configured level
//! - `LOG_LEVEL`: default level when `RUST_LOG` is not set
//! - `LOG_FORMAT`: `full` (default) or `compact`

use crate::error::{ForecastDataError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-field human readable lines
    #[default]
    Full,
    /// Compact single-line format
    Compact,
}

impl LogFormat {
    /// Parse a format name, falling back to `Full`
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "compact" => LogFormat::Compact,
            _ => LogFormat::Full,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level filter
    pub level: String,
    pub format: LogFormat,
    /// Include the module path of each event
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Full,
            include_target: true,
        }
    }
}

impl LogConfig {
    /// Create config from `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply `LOG_LEVEL` and `LOG_FORMAT` on top of this config when they are set
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(level) = env::var("LOG_LEVEL").ok().filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.format = LogFormat::from_name(&format);
        }
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

/// Install the global tracing subscriber.
///
/// Fails if the level is not a valid filter or a subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| {
            ForecastDataError::ConfigError(format!("Invalid log level '{}': {}", config.level, e))
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Full => registry
            .with(fmt::layer().with_target(config.include_target))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(config.include_target))
            .try_init(),
    };

    installed.map_err(|e| ForecastDataError::ConfigError(format!("Logging setup failed: {}", e)))
}
