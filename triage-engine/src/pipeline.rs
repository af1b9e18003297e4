// Language-aware triage: detect, translate, then classify
use std::sync::Arc;

use logger_redacted::{phi_debug, redact};

use crate::engine::TriageEngine;
use crate::language::{EnglishOnly, LanguageDetector, Translator, ENGLISH};
use crate::record::TriageRecord;

/// Front door for triage requests
///
/// Collaborator failures are absorbed here: a failed detection is treated as
/// English and a failed translation keeps the original text, so callers always
/// receive a record.
#[derive(Clone)]
pub struct TriagePipeline {
    engine: Arc<TriageEngine>,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
}

impl TriagePipeline {
    pub fn new(
        engine: Arc<TriageEngine>,
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            engine,
            detector,
            translator,
        }
    }

    /// Pipeline that treats every input as English
    pub fn english_only(engine: Arc<TriageEngine>) -> Self {
        Self::new(engine, Arc::new(EnglishOnly), Arc::new(EnglishOnly))
    }

    pub fn engine(&self) -> &TriageEngine {
        &self.engine
    }

    /// Normalized language code of the text, English on any failure
    pub async fn detect_language(&self, text: &str) -> String {
        // Nothing to detect in blank input.
        if text.trim().is_empty() {
            return ENGLISH.to_string();
        }

        match self.detector.detect(text).await {
            Ok(code) if !code.trim().is_empty() => code.trim().to_lowercase(),
            Ok(_) => {
                tracing::warn!("Language detector returned an empty code, assuming English");
                ENGLISH.to_string()
            }
            Err(e) => {
                tracing::warn!(error = %redact(&e.to_string()), "Language detection failed, assuming English");
                ENGLISH.to_string()
            }
        }
    }

    /// English rendition of the text, the text itself on any failure
    pub async fn translate_to_english(&self, text: &str, language: &str) -> String {
        if language == ENGLISH || text.trim().is_empty() {
            return text.to_string();
        }

        match self.translator.translate(text, language).await {
            Ok(translated) if !translated.trim().is_empty() => translated,
            Ok(_) => {
                tracing::warn!(language, "Translator returned empty text, using original");
                text.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    language,
                    error = %redact(&e.to_string()),
                    "Translation failed, using original text"
                );
                text.to_string()
            }
        }
    }

    pub async fn classify(&self, text: &str) -> TriageRecord {
        let language = self.detect_language(text).await;
        let english_text = self.translate_to_english(text, &language).await;
        phi_debug!(text, language = %language, translated = (english_text != text), "Prepared English text");

        self.engine.classify_english(text, &language, &english_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_english_only_passes_text_through() {
        let pipeline = TriagePipeline::english_only(Arc::new(TriageEngine::default()));
        let record = pipeline.classify("Chest pain and sweating").await;

        assert_eq!(record.detected_language, "en");
        assert_eq!(record.english_text, "Chest pain and sweating");
        assert_eq!(record.original_text, "Chest pain and sweating");
        assert!(record.is_critical());
    }

    #[tokio::test]
    async fn test_blank_input_is_english() {
        let pipeline = TriagePipeline::english_only(Arc::new(TriageEngine::default()));
        assert_eq!(pipeline.detect_language("   ").await, "en");

        let record = pipeline.classify("").await;
        assert!(record.symptoms.is_empty());
        assert!(!record.is_critical());
    }
}
