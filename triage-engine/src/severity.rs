// Critical / normal split of symptom phrases
use serde::{Deserialize, Serialize};

use crate::fuzzy::FuzzyMatcher;
use crate::tables::SymptomVocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriageStatus {
    Critical,
    Normal,
}

/// Phrases partitioned by severity, input order preserved in both lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub critical: Vec<String>,
    pub normal: Vec<String>,
}

impl Classification {
    pub fn status(&self) -> TriageStatus {
        if self.critical.is_empty() {
            TriageStatus::Normal
        } else {
            TriageStatus::Critical
        }
    }
}

pub struct SeverityClassifier<'a> {
    vocabulary: &'a SymptomVocabulary,
    matcher: &'a FuzzyMatcher,
}

impl<'a> SeverityClassifier<'a> {
    pub fn new(vocabulary: &'a SymptomVocabulary, matcher: &'a FuzzyMatcher) -> Self {
        Self { vocabulary, matcher }
    }

    /// Critical keyword the phrase matched, if any
    pub fn critical_keyword(&self, phrase: &str) -> Option<&'a str> {
        self.vocabulary.first_match(phrase, self.matcher)
    }

    pub fn classify(&self, phrases: &[String]) -> Classification {
        let mut classification = Classification::default();

        for phrase in phrases {
            match self.critical_keyword(phrase) {
                Some(keyword) => {
                    tracing::debug!(keyword, "Phrase matched critical vocabulary");
                    classification.critical.push(phrase.clone());
                }
                None => classification.normal.push(phrase.clone()),
            }
        }

        classification
    }
}
