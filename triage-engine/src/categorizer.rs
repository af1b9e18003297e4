// Routes critical phrases to departments
use serde::{Deserialize, Serialize};

use crate::department::Department;
use crate::fuzzy::FuzzyMatcher;
use crate::tables::{DepartmentMap, OrderedTable};

/// Department used when no routing keyword matches a critical phrase
pub const FALLBACK_DEPARTMENT: Department = Department::Emergency;

/// Critical phrases grouped by department
///
/// Departments appear in the order they were first assigned a phrase and
/// every bucket holds at least one phrase. Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentBuckets(OrderedTable<Department, Vec<String>>);

impl DepartmentBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, department: Department, phrase: impl Into<String>) {
        self.0.get_or_insert_with(department, Vec::new).push(phrase.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of departments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, department: Department) -> Option<&[String]> {
        self.0.get(&department).map(Vec::as_slice)
    }

    pub fn departments(&self) -> impl Iterator<Item = Department> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Department, &[String])> {
        self.0.iter().map(|(d, phrases)| (*d, phrases.as_slice()))
    }

    /// Department holding the most phrases; the earliest one wins a tie
    pub fn largest(&self) -> Option<(Department, &[String])> {
        self.iter().fold(None, |best, (department, phrases)| match best {
            Some((_, top)) if top.len() >= phrases.len() => best,
            _ => Some((department, phrases)),
        })
    }
}

pub struct DepartmentCategorizer<'a> {
    map: &'a DepartmentMap,
    matcher: &'a FuzzyMatcher,
}

impl<'a> DepartmentCategorizer<'a> {
    pub fn new(map: &'a DepartmentMap, matcher: &'a FuzzyMatcher) -> Self {
        Self { map, matcher }
    }

    pub fn department_for(&self, phrase: &str) -> Department {
        self.map.route(phrase, self.matcher).unwrap_or_else(|| {
            tracing::debug!(
                fallback = %FALLBACK_DEPARTMENT,
                "No routing keyword matched, using fallback department"
            );
            FALLBACK_DEPARTMENT
        })
    }

    pub fn categorize(&self, critical: &[String]) -> DepartmentBuckets {
        let mut buckets = DepartmentBuckets::new();
        for phrase in critical {
            buckets.push(self.department_for(phrase), phrase.as_str());
        }
        buckets
    }
}
