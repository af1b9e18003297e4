use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TriageError, TriageResult};
use crate::fuzzy::DEFAULT_THRESHOLD;

/// Engine settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum similarity for a fuzzy keyword match
    pub match_threshold: f64,
    /// YAML file replacing the built-in tables
    pub tables_path: Option<PathBuf>,
    /// Whole-word delimiters added to the built-in conjunctions
    #[serde(default)]
    pub extra_conjunctions: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            match_threshold: DEFAULT_THRESHOLD,
            tables_path: None,
            extra_conjunctions: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Load from `TRIAGE_MATCH_THRESHOLD`, `TRIAGE_TABLES_PATH` and
    /// `TRIAGE_EXTRA_CONJUNCTIONS` (comma or whitespace separated)
    pub fn from_env() -> TriageResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> TriageResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let match_threshold = match lookup("TRIAGE_MATCH_THRESHOLD") {
            Some(raw) => raw.trim().parse::<f64>().map_err(|e| TriageError::InvalidConfig {
                key: "TRIAGE_MATCH_THRESHOLD".to_string(),
                message: e.to_string(),
            })?,
            None => defaults.match_threshold,
        };

        let tables_path = lookup("TRIAGE_TABLES_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let extra_conjunctions = lookup("TRIAGE_EXTRA_CONJUNCTIONS")
            .map(|raw| {
                raw.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|word| !word.is_empty())
                    .map(str::to_lowercase)
                    .collect()
            })
            .unwrap_or_default();

        let config = Self {
            match_threshold,
            tables_path,
            extra_conjunctions,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TriageResult<()> {
        if !self.match_threshold.is_finite() || !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(TriageError::InvalidThreshold(self.match_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> TriageResult<EngineConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!((config.match_threshold - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TRIAGE_MATCH_THRESHOLD", "0.75"),
            ("TRIAGE_TABLES_PATH", "/etc/triage/tables.yaml"),
        ])
        .unwrap();
        assert!((config.match_threshold - 0.75).abs() < f64::EPSILON);
        assert_eq!(config.tables_path, Some(PathBuf::from("/etc/triage/tables.yaml")));
    }

    #[test]
    fn test_extra_conjunctions() {
        let config = load(&[("TRIAGE_EXTRA_CONJUNCTIONS", " Y, con  plus ")]).unwrap();
        assert_eq!(config.extra_conjunctions, vec!["y", "con", "plus"]);

        let config = load(&[("TRIAGE_EXTRA_CONJUNCTIONS", " , ")]).unwrap();
        assert!(config.extra_conjunctions.is_empty());
    }

    #[test]
    fn test_invalid_threshold() {
        assert!(matches!(
            load(&[("TRIAGE_MATCH_THRESHOLD", "high")]),
            Err(TriageError::InvalidConfig { .. })
        ));
        assert!(matches!(
            load(&[("TRIAGE_MATCH_THRESHOLD", "1.2")]),
            Err(TriageError::InvalidThreshold(_))
        ));
    }
}
