// src/config.rs
use std::env;

/// Runtime settings for the binary. Only logging is configurable; the CSV
/// endpoint is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Default log directive (`LOG_LEVEL`).
    pub log_level: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("LOG_LEVEL").ok())
    }

    /// Resolve settings from an already-read `LOG_LEVEL`; `None` or a blank
    /// value falls back to `info`.
    pub fn from_vars(log_level: Option<String>) -> Self {
        let log_level = log_level
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "info".to_string());

        Self { log_level }
    }
}
