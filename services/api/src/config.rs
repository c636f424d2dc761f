//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use mood_check_core::EnrichmentSettings;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub static_dir: PathBuf,
    pub generation_endpoint: String,
    pub generation_health_endpoint: String,
    pub generation_model: String,
    pub generation_timeout: Duration,
    pub generation_temperature: f32,
    pub generation_max_tokens: u32,
    pub health_check_timeout: Duration,
    pub translation_endpoint: String,
    pub translation_timeout: Duration,
    pub source_language: String,
    pub target_language: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        // --- Server Settings ---
        let bind_address = parse_var("BIND_ADDRESS", or_default("BIND_ADDRESS", "0.0.0.0:8000"))?;

        let log_level_str = or_default("RUST_LOG", "INFO");
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let static_dir = PathBuf::from(or_default("STATIC_DIR", "./static"));

        // --- Generation Backend ---
        let generation_endpoint =
            or_default("GENERATION_ENDPOINT", "http://localhost:11434/api/generate");
        let generation_health_endpoint =
            or_default("GENERATION_HEALTH_ENDPOINT", "http://localhost:11434/api/tags");
        let generation_model = or_default("GENERATION_MODEL", "qwen2.5:1.5b");
        let generation_timeout = parse_secs(
            "GENERATION_TIMEOUT_SECS",
            or_default("GENERATION_TIMEOUT_SECS", "30"),
        )?;
        let generation_temperature: f32 = parse_var(
            "GENERATION_TEMPERATURE",
            or_default("GENERATION_TEMPERATURE", "0.7"),
        )?;
        let generation_max_tokens = parse_var(
            "GENERATION_MAX_TOKENS",
            or_default("GENERATION_MAX_TOKENS", "150"),
        )?;
        let health_check_timeout = parse_secs(
            "HEALTH_CHECK_TIMEOUT_SECS",
            or_default("HEALTH_CHECK_TIMEOUT_SECS", "2"),
        )?;

        // --- Translation Backend ---
        let translation_endpoint = or_default(
            "TRANSLATION_ENDPOINT",
            "https://translate.googleapis.com/translate_a/single",
        );
        let translation_timeout = parse_secs(
            "TRANSLATION_TIMEOUT_SECS",
            or_default("TRANSLATION_TIMEOUT_SECS", "10"),
        )?;
        let source_language = non_empty("SOURCE_LANGUAGE", or_default("SOURCE_LANGUAGE", "es"))?;
        let target_language = non_empty("TARGET_LANGUAGE", or_default("TARGET_LANGUAGE", "eu"))?;

        if !generation_temperature.is_finite() || generation_temperature < 0.0 {
            return Err(ConfigError::InvalidValue(
                "GENERATION_TEMPERATURE".to_string(),
                format!("'{}' must be a non-negative number", generation_temperature),
            ));
        }

        Ok(Self {
            bind_address,
            log_level,
            static_dir,
            generation_endpoint,
            generation_health_endpoint,
            generation_model,
            generation_timeout,
            generation_temperature,
            generation_max_tokens,
            health_check_timeout,
            translation_endpoint,
            translation_timeout,
            source_language,
            target_language,
        })
    }

    /// The subset of settings the enrichment orchestrator needs.
    pub fn enrichment_settings(&self) -> EnrichmentSettings {
        EnrichmentSettings {
            generation_timeout: self.generation_timeout,
            translation_timeout: self.translation_timeout,
            source_language: self.source_language.clone(),
            target_language: self.target_language.clone(),
        }
    }
}

fn parse_var<T>(key: &str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue(key.to_string(), format!("'{}': {}", raw, e)))
}

fn parse_secs(key: &str, raw: String) -> Result<Duration, ConfigError> {
    let secs: u64 = parse_var(key, raw)?;
    if secs == 0 {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            "timeout must be at least one second".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

fn non_empty(key: &str, raw: String) -> Result<String, ConfigError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ConfigError::MissingVar(key.to_string()));
    }
    Ok(value.to_string())
}
