// Top department, probable condition and recommended doctor
use serde::{Deserialize, Serialize};

use crate::categorizer::DepartmentBuckets;
use crate::department::{Department, Specialist};
use crate::fuzzy::FuzzyMatcher;
use crate::tables::{DiseaseTable, DoctorMap};

/// Condition reported when no disease keyword matches a critical bucket
pub const UNIDENTIFIED_CONDITION: &str = "Unidentified Emergency Condition";

/// Condition reported for non-critical input
pub const COMMON_ILLNESS: &str = "Common Illness";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub top_department: Department,
    pub disease_prediction: String,
    pub recommended_doctor: Specialist,
}

impl DiseaseInfo {
    /// Outcome for input without critical symptoms
    pub fn common_illness() -> Self {
        Self {
            top_department: Department::General,
            disease_prediction: COMMON_ILLNESS.to_string(),
            recommended_doctor: Specialist::GeneralPhysician,
        }
    }

    /// Outcome when a critical finding cannot be attributed to any department
    pub fn unidentified_emergency() -> Self {
        Self {
            top_department: Department::Emergency,
            disease_prediction: UNIDENTIFIED_CONDITION.to_string(),
            recommended_doctor: Specialist::EmergencyPhysician,
        }
    }
}

pub struct DiseasePredictor<'a> {
    diseases: &'a DiseaseTable,
    doctors: &'a DoctorMap,
    matcher: &'a FuzzyMatcher,
}

impl<'a> DiseasePredictor<'a> {
    pub fn new(diseases: &'a DiseaseTable, doctors: &'a DoctorMap, matcher: &'a FuzzyMatcher) -> Self {
        Self {
            diseases,
            doctors,
            matcher,
        }
    }

    pub fn predict(&self, buckets: &DepartmentBuckets) -> DiseaseInfo {
        let Some((department, phrases)) = buckets.largest() else {
            return DiseaseInfo::unidentified_emergency();
        };

        let condition = self
            .diseases
            .predict(department, phrases.iter().map(String::as_str), self.matcher)
            .unwrap_or(UNIDENTIFIED_CONDITION);

        DiseaseInfo {
            top_department: department,
            disease_prediction: condition.to_string(),
            recommended_doctor: self.doctors.specialist_for(department),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::TriageTables;

    fn predict(buckets: &DepartmentBuckets) -> DiseaseInfo {
        let tables = TriageTables::standard();
        let matcher = FuzzyMatcher::default();
        DiseasePredictor::new(&tables.diseases, &tables.doctors, &matcher).predict(buckets)
    }

    #[test]
    fn test_predicts_from_largest_bucket() {
        let mut buckets = DepartmentBuckets::new();
        buckets.push(Department::Cardiology, "chest pain");
        buckets.push(Department::Neurology, "seizure");
        buckets.push(Department::Neurology, "slurred speech");

        let info = predict(&buckets);
        assert_eq!(info.top_department, Department::Neurology);
        assert_eq!(info.disease_prediction, "Epilepsy");
        assert_eq!(info.recommended_doctor, Specialist::Neurologist);
    }

    #[test]
    fn test_unmatched_bucket_is_unidentified() {
        let mut buckets = DepartmentBuckets::new();
        buckets.push(Department::Emergency, "stab wound");

        let info = predict(&buckets);
        assert_eq!(info.top_department, Department::Emergency);
        assert_eq!(info.disease_prediction, UNIDENTIFIED_CONDITION);
        assert_eq!(info.recommended_doctor, Specialist::EmergencyPhysician);
    }

    #[test]
    fn test_department_without_disease_table() {
        let mut buckets = DepartmentBuckets::new();
        buckets.push(Department::Dermatology, "severe rash");

        let info = predict(&buckets);
        assert_eq!(info.top_department, Department::Dermatology);
        assert_eq!(info.disease_prediction, UNIDENTIFIED_CONDITION);
        assert_eq!(info.recommended_doctor, Specialist::Dermatologist);
    }

    #[test]
    fn test_empty_buckets() {
        assert_eq!(predict(&DepartmentBuckets::new()), DiseaseInfo::unidentified_emergency());
    }
}
