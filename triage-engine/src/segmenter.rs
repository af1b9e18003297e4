// Splits free text into individual symptom phrases
use regex::Regex;

use crate::error::TriageResult;
use crate::normalizer::{normalize, static_pattern};

/// Conjunctions matched as whole words, English and Hindi "and" (और, तथा)
pub const DEFAULT_CONJUNCTIONS: &[&str] = &["and", "with", "और", "तथा"];

/// Delimiters matched anywhere
pub const DEFAULT_LITERALS: &[&str] = &[","];

const DEFAULT_DELIMITER: &str = r"\band\b|,|\bwith\b|\bऔर\b|\bतथा\b";

/// Symptom phrase segmenter
///
/// Splitting happens on the lowercased raw text, before punctuation is
/// stripped, so that commas still act as delimiters. Each fragment is then
/// normalized and empty fragments are dropped.
#[derive(Debug, Clone)]
pub struct SymptomSegmenter {
    delimiter: Option<Regex>,
}

impl Default for SymptomSegmenter {
    fn default() -> Self {
        Self {
            delimiter: Some(static_pattern(DEFAULT_DELIMITER)),
        }
    }
}

impl SymptomSegmenter {
    /// Build a segmenter from custom delimiters
    ///
    /// `conjunctions` only split on word boundaries; `literals` split wherever
    /// they occur. Both are escaped, never interpreted as patterns.
    pub fn new(conjunctions: &[&str], literals: &[&str]) -> TriageResult<Self> {
        let alternatives: Vec<String> = conjunctions
            .iter()
            .filter(|w| !w.trim().is_empty())
            .map(|w| format!(r"\b{}\b", regex::escape(&w.trim().to_lowercase())))
            .chain(
                literals
                    .iter()
                    .filter(|l| !l.is_empty())
                    .map(|l| regex::escape(&l.to_lowercase())),
            )
            .collect();

        // An empty alternation would match between every character.
        let delimiter = if alternatives.is_empty() {
            None
        } else {
            Some(Regex::new(&alternatives.join("|"))?)
        };

        Ok(Self { delimiter })
    }

    /// Ordered, normalized, non-empty symptom phrases
    pub fn segment(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let fragments: Vec<&str> = match &self.delimiter {
            Some(delimiter) => delimiter.split(&lowered).collect(),
            None => vec![lowered.as_str()],
        };

        fragments
            .into_iter()
            .map(normalize)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        SymptomSegmenter::default().segment(text)
    }

    #[test]
    fn test_splits_on_conjunctions_and_commas() {
        assert_eq!(
            segment("I have severe chest pain and sweating"),
            vec!["i have severe chest pain", "sweating"]
        );
        assert_eq!(
            segment("seizure, choking and chest pain with slurred speech"),
            vec!["seizure", "choking", "chest pain", "slurred speech"]
        );
        assert_eq!(
            segment("I feel tired, with a mild cough and a runny nose"),
            vec!["i feel tired", "a mild cough", "a runny nose"]
        );
    }

    #[test]
    fn test_conjunctions_respect_word_boundaries() {
        assert_eq!(segment("sandy hands"), vec!["sandy hands"]);
        assert_eq!(segment("withdrawal symptoms"), vec!["withdrawal symptoms"]);
        assert_eq!(segment("Pain AND fever"), vec!["pain", "fever"]);
    }

    #[test]
    fn test_hindi_conjunctions() {
        let phrases = segment("बुखार और खांसी तथा दर्द");
        assert_eq!(phrases.len(), 3);
    }

    #[test]
    fn test_hindi_conjunctions_respect_word_boundaries() {
        // औरत ("woman") starts with और
        assert_eq!(segment("औरत को बुखार"), vec!["औरत को बुखार"]);
        assert_eq!(segment("तथागत"), vec!["तथागत"]);
        assert_eq!(segment("औरत को बुखार और खांसी"), vec!["औरत को बुखार", "खांसी"]);
    }

    #[test]
    fn test_empty_fragments_are_dropped() {
        assert!(segment("").is_empty());
        assert!(segment("   ").is_empty());
        assert!(segment(", and ,with,").is_empty());
        assert_eq!(segment("fever,, and  ,cough"), vec!["fever", "cough"]);
    }

    #[test]
    fn test_custom_delimiters() {
        let segmenter = SymptomSegmenter::new(&["y", "con"], &[";"]).unwrap();
        assert_eq!(
            segmenter.segment("dolor de pecho y sudor; fiebre"),
            vec!["dolor de pecho", "sudor", "fiebre"]
        );
    }

    #[test]
    fn test_default_delimiters_match_builder() {
        let built = SymptomSegmenter::new(DEFAULT_CONJUNCTIONS, DEFAULT_LITERALS).unwrap();
        let text = "Chest pain, sweating with nausea and बुखार और खांसी";
        assert_eq!(built.segment(text), segment(text));
    }

    #[test]
    fn test_no_delimiters_keeps_whole_text() {
        let segmenter = SymptomSegmenter::new(&[], &[]).unwrap();
        assert_eq!(segmenter.segment("pain and fever"), vec!["pain and fever"]);
    }
}
