// Configuration module

mod models;

pub use models::*;

use crate::error::{ApiError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

/// Environment variable holding the upstream API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    ///
    /// The upstream credential is read from `GEMINI_API_KEY` unless the
    /// config file already provides one.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: PROMPTLENS_)
            .add_source(Environment::with_prefix("PROMPTLENS").separator("_"))
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        if config.gemini.api_key.is_none() {
            config.gemini.api_key = std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.is_empty());
        }

        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".promptlens")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
