//! # Triage Engine
//!
//! Rule-based emergency triage of free-text symptom descriptions.
//!
//! A description is split into symptom phrases, each phrase is compared
//! against a vocabulary of critical symptoms with a fuzzy matcher, critical
//! phrases are routed to hospital departments, and the busiest department
//! yields a probable condition and a recommended specialist.
//!
//! ## Example
//!
//! ```rust
//! use triage_engine::{Department, TriageEngine, TriageStatus};
//!
//! let engine = TriageEngine::default();
//! let record = engine.classify("I have severe chest pain and sweating");
//!
//! assert_eq!(record.final_status, TriageStatus::Critical);
//! assert_eq!(record.disease_info.top_department, Department::Cardiology);
//! assert_eq!(record.disease_info.disease_prediction, "Myocardial Infarction");
//! ```
//!
//! Non-English input goes through [`TriagePipeline`], which detects the
//! language and translates before classifying.

pub mod categorizer;
pub mod config;
pub mod department;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod language;
pub mod normalizer;
pub mod pipeline;
pub mod predictor;
pub mod record;
pub mod segmenter;
pub mod severity;
pub mod tables;

pub use categorizer::{DepartmentBuckets, DepartmentCategorizer, FALLBACK_DEPARTMENT};
pub use config::EngineConfig;
pub use department::{Department, Specialist};
pub use engine::TriageEngine;
pub use error::{LanguageServiceError, TriageError, TriageResult};
pub use fuzzy::{similarity_ratio, FuzzyMatcher, MatchOutcome, DEFAULT_THRESHOLD};
pub use language::{EnglishOnly, LanguageDetector, Translator, ENGLISH};
pub use normalizer::normalize;
pub use pipeline::TriagePipeline;
pub use predictor::{DiseaseInfo, DiseasePredictor, COMMON_ILLNESS, UNIDENTIFIED_CONDITION};
pub use record::TriageRecord;
pub use segmenter::SymptomSegmenter;
pub use severity::{Classification, SeverityClassifier, TriageStatus};
pub use tables::{DepartmentMap, DiseaseTable, DoctorMap, OrderedTable, SymptomVocabulary, TriageTables};
