//! Clinical lookup tables driving the triage rules
//!
//! All tables are immutable once built. [`TriageTables::standard`] returns the
//! built-in set; [`TriageTables::from_yaml_file`] loads a replacement set with
//! the same shape:
//!
//! ```yaml
//! critical_symptoms: ["chest pain", "stroke"]
//! department_keywords:
//!   - { keyword: chest, department: Cardiology }
//! disease_table:
//!   - department: Cardiology
//!     entries:
//!       - { keyword: chest, condition: Myocardial Infarction }
//! doctors:            # optional, defaults to the standard roster
//!   - { department: Cardiology, specialist: Cardiologist }
//! ```

pub mod ordered;
mod standard;

use std::path::Path;

use serde::Deserialize;

use crate::department::{Department, Specialist};
use crate::error::{TriageError, TriageResult};
use crate::fuzzy::FuzzyMatcher;

pub use ordered::OrderedTable;

/// Ordered list of critical symptom phrases
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomVocabulary {
    phrases: Vec<String>,
}

impl SymptomVocabulary {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(standard::CRITICAL_SYMPTOMS.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// First critical phrase the candidate matches
    pub fn first_match(&self, candidate: &str, matcher: &FuzzyMatcher) -> Option<&str> {
        self.iter().find(|keyword| matcher.is_match(candidate, keyword))
    }
}

/// Ordered keyword to department routing table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentMap {
    keywords: OrderedTable<String, Department>,
}

impl DepartmentMap {
    pub fn new(keywords: OrderedTable<String, Department>) -> Self {
        Self { keywords }
    }

    pub fn standard() -> Self {
        Self::new(
            standard::DEPARTMENT_KEYWORDS
                .iter()
                .map(|(keyword, department)| ((*keyword).to_string(), *department))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Department)> {
        self.keywords.iter()
    }

    /// Department of the first keyword the phrase matches
    pub fn route(&self, phrase: &str, matcher: &FuzzyMatcher) -> Option<Department> {
        self.keywords
            .find(|keyword| matcher.is_match(phrase, keyword))
            .map(|(_, department)| *department)
    }
}

/// Per-department ordered keyword to condition tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseTable {
    conditions: OrderedTable<Department, OrderedTable<String, String>>,
}

impl DiseaseTable {
    pub fn new(conditions: OrderedTable<Department, OrderedTable<String, String>>) -> Self {
        Self { conditions }
    }

    pub fn standard() -> Self {
        Self::new(
            standard::DISEASE_TABLE
                .iter()
                .map(|(department, entries)| {
                    let entries = entries
                        .iter()
                        .map(|(keyword, condition)| ((*keyword).to_string(), (*condition).to_string()))
                        .collect();
                    (*department, entries)
                })
                .collect(),
        )
    }

    pub fn conditions(&self, department: Department) -> Option<&OrderedTable<String, String>> {
        self.conditions.get(&department)
    }

    pub fn departments(&self) -> impl Iterator<Item = Department> + '_ {
        self.conditions.keys().copied()
    }

    /// Condition of the first keyword matched by any phrase
    ///
    /// Phrases are scanned in order and, for each phrase, keywords in table
    /// order; the first hit wins.
    pub fn predict<'a, I>(
        &self,
        department: Department,
        phrases: I,
        matcher: &FuzzyMatcher,
    ) -> Option<&str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let table = self.conditions(department)?;
        phrases.into_iter().find_map(|phrase| {
            table
                .find(|keyword| matcher.is_match(phrase, keyword))
                .map(|(_, condition)| condition.as_str())
        })
    }
}

/// Department to specialist roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorMap {
    doctors: OrderedTable<Department, Specialist>,
}

impl DoctorMap {
    pub const FALLBACK: Specialist = Specialist::GeneralPhysician;

    pub fn new(doctors: OrderedTable<Department, Specialist>) -> Self {
        Self { doctors }
    }

    pub fn standard() -> Self {
        Self::new(
            Department::ALL
                .into_iter()
                .map(|department| (department, department.default_specialist()))
                .collect(),
        )
    }

    /// Specialist for a department, General Physician when unstaffed
    pub fn specialist_for(&self, department: Department) -> Specialist {
        self.doctors.get(&department).copied().unwrap_or(Self::FALLBACK)
    }
}

/// The complete rule set used by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageTables {
    pub vocabulary: SymptomVocabulary,
    pub departments: DepartmentMap,
    pub diseases: DiseaseTable,
    pub doctors: DoctorMap,
}

impl TriageTables {
    pub fn standard() -> Self {
        Self {
            vocabulary: SymptomVocabulary::standard(),
            departments: DepartmentMap::standard(),
            diseases: DiseaseTable::standard(),
            doctors: DoctorMap::standard(),
        }
    }

    pub fn from_yaml_str(source: &str) -> TriageResult<Self> {
        let document: TablesDocument = serde_yaml::from_str(source)?;
        document.into_tables()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> TriageResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| TriageError::TablesIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesDocument {
    critical_symptoms: Vec<String>,
    department_keywords: Vec<KeywordEntry>,
    disease_table: Vec<DiseaseSection>,
    #[serde(default)]
    doctors: Option<Vec<DoctorEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeywordEntry {
    keyword: String,
    department: Department,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DiseaseSection {
    department: Department,
    entries: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConditionEntry {
    keyword: String,
    condition: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DoctorEntry {
    department: Department,
    specialist: Specialist,
}

/// Lowercased, trimmed keyword; empty keywords would match every phrase
fn keyword(raw: &str, section: &str) -> TriageResult<String> {
    let keyword = raw.trim().to_lowercase();
    if keyword.is_empty() {
        return Err(TriageError::InvalidTables(format!(
            "empty keyword in {section}"
        )));
    }
    Ok(keyword)
}

impl TablesDocument {
    fn into_tables(self) -> TriageResult<TriageTables> {
        if self.critical_symptoms.is_empty() {
            return Err(TriageError::InvalidTables(
                "critical_symptoms must not be empty".to_string(),
            ));
        }

        let phrases = self
            .critical_symptoms
            .iter()
            .map(|p| keyword(p, "critical_symptoms"))
            .collect::<TriageResult<Vec<_>>>()?;

        let mut routing = OrderedTable::new();
        for entry in &self.department_keywords {
            routing.insert(keyword(&entry.keyword, "department_keywords")?, entry.department);
        }

        let mut conditions = OrderedTable::new();
        for section in self.disease_table {
            let mut entries = OrderedTable::new();
            for entry in &section.entries {
                let condition = entry.condition.trim();
                if condition.is_empty() {
                    return Err(TriageError::InvalidTables(format!(
                        "empty condition for keyword '{}' in {}",
                        entry.keyword, section.department
                    )));
                }
                entries.insert(keyword(&entry.keyword, "disease_table")?, condition.to_string());
            }
            conditions.insert(section.department, entries);
        }

        let doctors = match self.doctors {
            Some(entries) => DoctorMap::new(
                entries
                    .into_iter()
                    .map(|entry| (entry.department, entry.specialist))
                    .collect(),
            ),
            None => DoctorMap::standard(),
        };

        Ok(TriageTables {
            vocabulary: SymptomVocabulary::new(phrases),
            departments: DepartmentMap::new(routing),
            diseases: DiseaseTable::new(conditions),
            doctors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUSTOM_TABLES: &str = r#"
critical_symptoms:
  - "Chest Pain"
  - stroke
department_keywords:
  - { keyword: chest, department: Cardiology }
  - { keyword: stroke, department: Neurology }
disease_table:
  - department: Cardiology
    entries:
      - { keyword: chest, condition: Myocardial Infarction }
doctors:
  - { department: Cardiology, specialist: Cardiologist }
"#;

    #[test]
    fn test_standard_tables_are_complete() {
        let tables = TriageTables::standard();
        assert!(tables.vocabulary.iter().any(|p| p == "chest pain"));
        assert_eq!(tables.vocabulary.iter().next(), Some("heart attack"));
        assert_eq!(tables.departments.iter().next().map(|(k, _)| k.as_str()), Some("heart"));

        for department in Department::ALL {
            assert_eq!(
                tables.doctors.specialist_for(department),
                department.default_specialist()
            );
        }
    }

    #[test]
    fn test_routing_is_first_match() {
        let tables = TriageTables::standard();
        let matcher = FuzzyMatcher::default();
        // "left arm" is listed before the neurological "arm"
        assert_eq!(
            tables.departments.route("pain in my left arm", &matcher),
            Some(Department::Cardiology)
        );
        assert_eq!(
            tables.departments.route("arm weakness", &matcher),
            Some(Department::Neurology)
        );
        assert_eq!(tables.departments.route("labor pain", &matcher), None);
    }

    #[test]
    fn test_disease_prediction_scans_phrases_then_keywords() {
        let tables = TriageTables::standard();
        let matcher = FuzzyMatcher::default();
        let condition = tables.diseases.predict(
            Department::Cardiology,
            ["sweating", "i have severe chest pain"],
            &matcher,
        );
        assert_eq!(condition, Some("Acute Coronary Syndrome"));

        let condition = tables
            .diseases
            .predict(Department::Dermatology, ["rash"], &matcher);
        assert_eq!(condition, None);
    }

    #[test]
    fn test_yaml_tables_load() {
        let tables = TriageTables::from_yaml_str(CUSTOM_TABLES).unwrap();
        assert_eq!(
            tables.vocabulary.iter().collect::<Vec<_>>(),
            vec!["chest pain", "stroke"]
        );
        assert_eq!(tables.departments.len(), 2);
        assert_eq!(
            tables.doctors.specialist_for(Department::Cardiology),
            Specialist::Cardiologist
        );
        // unlisted departments fall back
        assert_eq!(
            tables.doctors.specialist_for(Department::Neurology),
            Specialist::GeneralPhysician
        );
    }

    #[test]
    fn test_yaml_without_doctors_uses_standard_roster() {
        let source = CUSTOM_TABLES
            .split("doctors:")
            .next()
            .unwrap_or_default()
            .to_string();
        let tables = TriageTables::from_yaml_str(&source).unwrap();
        assert_eq!(
            tables.doctors.specialist_for(Department::Neurology),
            Specialist::Neurologist
        );
    }

    #[test]
    fn test_yaml_rejects_bad_tables() {
        let empty_keyword = CUSTOM_TABLES.replace("keyword: stroke", "keyword: \"  \"");
        assert!(matches!(
            TriageTables::from_yaml_str(&empty_keyword),
            Err(TriageError::InvalidTables(_))
        ));

        let unknown_department = CUSTOM_TABLES.replace("department: Neurology", "department: Oncology");
        assert!(matches!(
            TriageTables::from_yaml_str(&unknown_department),
            Err(TriageError::TablesParse(_))
        ));

        let no_vocabulary = "critical_symptoms: []\ndepartment_keywords: []\ndisease_table: []\n";
        assert!(matches!(
            TriageTables::from_yaml_str(no_vocabulary),
            Err(TriageError::InvalidTables(_))
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TriageTables::from_yaml_file("/nonexistent/triage-tables.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/triage-tables.yaml"));
    }
}
