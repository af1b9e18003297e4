use serde::{Deserialize, Serialize};

use crate::categorizer::DepartmentBuckets;
use crate::predictor::DiseaseInfo;
use crate::severity::{Classification, TriageStatus};

/// Complete result of one triage request
///
/// Field names are part of the HTTP contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRecord {
    /// Input exactly as received
    pub original_text: String,
    /// ISO 639-1 code, `"en"` when detection failed
    pub detected_language: String,
    /// Translation of the input, or the input itself
    pub english_text: String,
    /// Normalized phrases in input order
    pub symptoms: Vec<String>,
    pub classification: Classification,
    pub final_status: TriageStatus,
    pub critical_departments: DepartmentBuckets,
    pub disease_info: DiseaseInfo,
}

impl TriageRecord {
    pub fn is_critical(&self) -> bool {
        self.final_status == TriageStatus::Critical
    }
}
