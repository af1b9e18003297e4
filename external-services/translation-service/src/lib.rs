//! # Translation Service
//!
//! Language detection and translation to English for the triage pipeline,
//! backed by a self-hosted LibreTranslate server.
//!
//! Translation is optional. When it is disabled the pipeline receives the
//! [`EnglishOnly`] collaborators and every request is treated as English.

pub mod client;
pub mod config;

pub use client::{best_language, translated_text, DetectedLanguage, LibreTranslateClient};
pub use config::{TranslationConfig, TranslationConfigError};

use std::sync::Arc;

use triage_engine::{EnglishOnly, LanguageDetector, Translator};

/// Detector/translator pair handed to `TriagePipeline::new`
pub type Collaborators = (Arc<dyn LanguageDetector>, Arc<dyn Translator>);

/// Build the collaborators described by `config`
pub fn build_collaborators(config: &TranslationConfig) -> Result<Collaborators, TranslationConfigError> {
    if !config.enabled {
        tracing::info!("Translation disabled, treating all input as English");
        let detector: Arc<dyn LanguageDetector> = Arc::new(EnglishOnly);
        let translator: Arc<dyn Translator> = Arc::new(EnglishOnly);
        return Ok((detector, translator));
    }

    let client = Arc::new(LibreTranslateClient::new(config)?);
    tracing::info!(
        url = %logger_redacted::redact(&config.api_url),
        "Using LibreTranslate for language detection and translation"
    );
    let detector: Arc<dyn LanguageDetector> = client.clone();
    let translator: Arc<dyn Translator> = client;
    Ok((detector, translator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_yields_english_only() {
        let (detector, translator) = build_collaborators(&TranslationConfig::default()).unwrap();
        assert_eq!(detector.detect("बुखार").await.unwrap(), "en");
        assert_eq!(translator.translate("बुखार", "hi").await.unwrap(), "बुखार");
    }

    #[test]
    fn test_enabled_validates_url() {
        let config = TranslationConfig {
            enabled: true,
            api_url: "localhost:5000".to_string(),
            ..TranslationConfig::default()
        };
        assert!(matches!(
            build_collaborators(&config),
            Err(TranslationConfigError::InvalidUrl(_))
        ));
    }
}
