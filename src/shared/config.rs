use log::LevelFilter;
use std::env;

use crate::shared::errors::AppResult;

pub const LOG_LEVEL_VAR: &str = "CATALOG_LOG_LEVEL";

/// Runtime settings read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Level applied to this crate's own log targets
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Debug,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read settings from the process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = level.trim().parse::<LevelFilter>()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_log_level() {
        let config = AppConfig::from_lookup(|key| {
            (key == LOG_LEVEL_VAR).then(|| "warn".to_string())
        })
        .unwrap();

        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = AppConfig::from_lookup(|_| Some("chatty".to_string()));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
