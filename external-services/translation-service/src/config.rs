use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_LIBRETRANSLATE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranslationConfigError {
    #[error("Invalid LibreTranslate URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Translation backend settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// When false every request is treated as English
    pub enabled: bool,
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: DEFAULT_LIBRETRANSLATE_URL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TranslationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, TranslationConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(var: F) -> Result<Self, TranslationConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let enabled = match var("TRANSLATION_ENABLED") {
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| TranslationConfigError::InvalidValue {
                key: "TRANSLATION_ENABLED".to_string(),
                value: raw,
            })?,
            None => defaults.enabled,
        };

        let timeout_secs = match var("TRANSLATION_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(TranslationConfigError::InvalidValue {
                    key: "TRANSLATION_TIMEOUT_SECS".to_string(),
                    value: raw,
                })?,
            None => defaults.timeout_secs,
        };

        let config = Self {
            enabled,
            api_url: var("LIBRETRANSLATE_URL").unwrap_or(defaults.api_url),
            api_key: var("LIBRETRANSLATE_API_KEY").filter(|k| !k.trim().is_empty()),
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TranslationConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(TranslationConfigError::InvalidUrl(self.api_url.clone()));
        }
        Ok(())
    }
}
