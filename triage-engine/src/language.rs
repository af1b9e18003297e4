// Language detection and translation seams
use async_trait::async_trait;

use crate::error::LanguageServiceError;

/// Language code assumed whenever detection is unavailable
pub const ENGLISH: &str = "en";

/// Detects the language of a text
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// ISO 639-1 code of the most likely language
    async fn detect(&self, text: &str) -> Result<String, LanguageServiceError>;
}

/// Translates text into English
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source_language: &str) -> Result<String, LanguageServiceError>;
}

/// Collaborator for deployments without a translation backend
///
/// Detects every text as English and returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishOnly;

#[async_trait]
impl LanguageDetector for EnglishOnly {
    async fn detect(&self, _text: &str) -> Result<String, LanguageServiceError> {
        Ok(ENGLISH.to_string())
    }
}

#[async_trait]
impl Translator for EnglishOnly {
    async fn translate(&self, text: &str, _source_language: &str) -> Result<String, LanguageServiceError> {
        Ok(text.to_string())
    }
}
