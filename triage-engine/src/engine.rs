//! Synchronous triage over English text
//!
//! The engine owns the rule set and runs the fixed sequence
//! segment → classify severity → route departments → predict condition.
//! It performs no I/O and never fails: every input, including empty text,
//! yields a complete [`TriageRecord`].

use std::sync::Arc;

use logger_redacted::{phi_debug, phi_info};

use crate::categorizer::DepartmentCategorizer;
use crate::config::EngineConfig;
use crate::error::TriageResult;
use crate::fuzzy::FuzzyMatcher;
use crate::language::ENGLISH;
use crate::predictor::{DiseaseInfo, DiseasePredictor};
use crate::record::TriageRecord;
use crate::segmenter::{SymptomSegmenter, DEFAULT_CONJUNCTIONS, DEFAULT_LITERALS};
use crate::severity::{SeverityClassifier, TriageStatus};
use crate::tables::TriageTables;

#[derive(Debug, Clone)]
pub struct TriageEngine {
    tables: Arc<TriageTables>,
    matcher: FuzzyMatcher,
    segmenter: SymptomSegmenter,
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new(Arc::new(TriageTables::standard()), FuzzyMatcher::default())
    }
}

impl TriageEngine {
    pub fn new(tables: Arc<TriageTables>, matcher: FuzzyMatcher) -> Self {
        Self {
            tables,
            matcher,
            segmenter: SymptomSegmenter::default(),
        }
    }

    /// Build from settings, loading replacement tables when a path is set
    pub fn from_config(config: &EngineConfig) -> TriageResult<Self> {
        config.validate()?;
        let matcher = FuzzyMatcher::new(config.match_threshold)?;

        let tables = match &config.tables_path {
            Some(path) => {
                let tables = TriageTables::from_yaml_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    critical_symptoms = tables.vocabulary.len(),
                    routing_keywords = tables.departments.len(),
                    "Loaded triage tables from file"
                );
                tables
            }
            None => TriageTables::standard(),
        };

        let engine = Self::new(Arc::new(tables), matcher);
        if config.extra_conjunctions.is_empty() {
            return Ok(engine);
        }

        let conjunctions: Vec<&str> = DEFAULT_CONJUNCTIONS
            .iter()
            .copied()
            .chain(config.extra_conjunctions.iter().map(String::as_str))
            .collect();
        let segmenter = SymptomSegmenter::new(&conjunctions, DEFAULT_LITERALS)?;
        Ok(engine.with_segmenter(segmenter))
    }

    pub fn with_segmenter(mut self, segmenter: SymptomSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    pub fn tables(&self) -> &TriageTables {
        &self.tables
    }

    pub fn matcher(&self) -> &FuzzyMatcher {
        &self.matcher
    }

    /// Triage text that is already English
    pub fn classify(&self, text: &str) -> TriageRecord {
        self.classify_english(text, ENGLISH, text)
    }

    /// Triage the English rendition of a request, recording its provenance
    pub fn classify_english(
        &self,
        original_text: &str,
        detected_language: &str,
        english_text: &str,
    ) -> TriageRecord {
        let symptoms = self.segmenter.segment(english_text);
        phi_debug!(english_text, phrases = symptoms.len(), "Segmented symptom text");

        let classification =
            SeverityClassifier::new(&self.tables.vocabulary, &self.matcher).classify(&symptoms);
        let final_status = classification.status();

        let critical_departments = DepartmentCategorizer::new(&self.tables.departments, &self.matcher)
            .categorize(&classification.critical);

        let disease_info = match final_status {
            TriageStatus::Critical => {
                DiseasePredictor::new(&self.tables.diseases, &self.tables.doctors, &self.matcher)
                    .predict(&critical_departments)
            }
            TriageStatus::Normal => DiseaseInfo::common_illness(),
        };

        phi_info!(
            original_text,
            language = detected_language,
            status = ?final_status,
            critical = classification.critical.len(),
            departments = critical_departments.len(),
            top_department = %disease_info.top_department,
            "Triage completed"
        );

        TriageRecord {
            original_text: original_text.to_string(),
            detected_language: detected_language.to_string(),
            english_text: english_text.to_string(),
            symptoms,
            classification,
            final_status,
            critical_departments,
            disease_info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::department::{Department, Specialist};

    #[test]
    fn test_critical_record() {
        let record = TriageEngine::default().classify("I have severe chest pain and sweating");

        assert_eq!(record.symptoms, vec!["i have severe chest pain", "sweating"]);
        assert_eq!(record.final_status, TriageStatus::Critical);
        assert_eq!(record.classification.critical, record.symptoms);
        assert!(record.classification.normal.is_empty());
        assert_eq!(record.disease_info.top_department, Department::Cardiology);
        assert_eq!(record.disease_info.disease_prediction, "Myocardial Infarction");
        assert_eq!(record.disease_info.recommended_doctor, Specialist::Cardiologist);
    }

    #[test]
    fn test_normal_record() {
        let record = TriageEngine::default().classify("I have a bad headache and fever");

        assert_eq!(record.final_status, TriageStatus::Normal);
        assert!(record.critical_departments.is_empty());
        assert_eq!(record.disease_info, DiseaseInfo::common_illness());
    }

    #[test]
    fn test_provenance_is_recorded() {
        let record = TriageEngine::default().classify_english(
            "सीने में दर्द और पसीना",
            "hi",
            "chest pain and sweating",
        );

        assert_eq!(record.original_text, "सीने में दर्द और पसीना");
        assert_eq!(record.detected_language, "hi");
        assert_eq!(record.english_text, "chest pain and sweating");
        assert_eq!(record.symptoms, vec!["chest pain", "sweating"]);
        assert!(record.is_critical());
    }

    #[test]
    fn test_strict_threshold_disables_fuzzy_hits() {
        let engine = TriageEngine::new(
            Arc::new(TriageTables::standard()),
            FuzzyMatcher::new(1.0).unwrap(),
        );
        assert_eq!(engine.classify("chest pian").final_status, TriageStatus::Normal);
        assert_eq!(TriageEngine::default().classify("chest pian").final_status, TriageStatus::Critical);
    }

    #[test]
    fn test_from_config_adds_conjunctions() {
        let config = EngineConfig {
            extra_conjunctions: vec!["y".to_string()],
            ..EngineConfig::default()
        };
        let engine = TriageEngine::from_config(&config).unwrap();

        let record = engine.classify("mareo y chest pain and sweating");
        assert_eq!(record.symptoms, vec!["mareo", "chest pain", "sweating"]);
        assert_eq!(
            TriageEngine::default().classify("mareo y chest pain").symptoms,
            vec!["mareo y chest pain"]
        );
    }

    #[test]
    fn test_from_config_defaults_to_standard_tables() {
        let engine = TriageEngine::from_config(&EngineConfig::default()).unwrap();
        assert_eq!(engine.tables(), &TriageTables::standard());
    }
}
