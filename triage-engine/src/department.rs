// Hospital departments and the specialists who staff them
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriageError;

/// Closed set of departments a patient can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Cardiology,
    Neurology,
    Pulmonology,
    Gastroenterology,
    Emergency,
    General,
    Nephrology,
    Endocrinology,
    Orthopedics,
    Dermatology,
    #[serde(rename = "ENT")]
    Ent,
    Gynecology,
    Psychiatry,
    #[serde(rename = "Infectious Diseases")]
    InfectiousDiseases,
}

impl Department {
    pub const ALL: [Department; 14] = [
        Department::Cardiology,
        Department::Neurology,
        Department::Pulmonology,
        Department::Gastroenterology,
        Department::Emergency,
        Department::General,
        Department::Nephrology,
        Department::Endocrinology,
        Department::Orthopedics,
        Department::Dermatology,
        Department::Ent,
        Department::Gynecology,
        Department::Psychiatry,
        Department::InfectiousDiseases,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Cardiology => "Cardiology",
            Department::Neurology => "Neurology",
            Department::Pulmonology => "Pulmonology",
            Department::Gastroenterology => "Gastroenterology",
            Department::Emergency => "Emergency",
            Department::General => "General",
            Department::Nephrology => "Nephrology",
            Department::Endocrinology => "Endocrinology",
            Department::Orthopedics => "Orthopedics",
            Department::Dermatology => "Dermatology",
            Department::Ent => "ENT",
            Department::Gynecology => "Gynecology",
            Department::Psychiatry => "Psychiatry",
            Department::InfectiousDiseases => "Infectious Diseases",
        }
    }

    /// Specialist staffing the department in the standard roster
    pub fn default_specialist(self) -> Specialist {
        match self {
            Department::Cardiology => Specialist::Cardiologist,
            Department::Neurology => Specialist::Neurologist,
            Department::Pulmonology => Specialist::Pulmonologist,
            Department::Gastroenterology => Specialist::Gastroenterologist,
            Department::Emergency => Specialist::EmergencyPhysician,
            Department::General => Specialist::GeneralPhysician,
            Department::Nephrology => Specialist::Nephrologist,
            Department::Endocrinology => Specialist::Endocrinologist,
            Department::Orthopedics => Specialist::OrthopedicSurgeon,
            Department::Dermatology => Specialist::Dermatologist,
            Department::Ent => Specialist::EntSpecialist,
            Department::Gynecology => Specialist::Gynecologist,
            Department::Psychiatry => Specialist::Psychiatrist,
            Department::InfectiousDiseases => Specialist::InfectiousDiseaseSpecialist,
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = TriageError;

    /// Case-insensitive lookup by display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TriageError::UnknownDepartment(s.to_string()))
    }
}

/// Doctor recommended to see the patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialist {
    Cardiologist,
    Neurologist,
    Pulmonologist,
    Gastroenterologist,
    #[serde(rename = "Emergency Physician")]
    EmergencyPhysician,
    #[serde(rename = "General Physician")]
    GeneralPhysician,
    Nephrologist,
    Endocrinologist,
    #[serde(rename = "Orthopedic Surgeon")]
    OrthopedicSurgeon,
    Dermatologist,
    #[serde(rename = "ENT Specialist")]
    EntSpecialist,
    Gynecologist,
    Psychiatrist,
    #[serde(rename = "Infectious Disease Specialist")]
    InfectiousDiseaseSpecialist,
}

impl Specialist {
    pub fn as_str(self) -> &'static str {
        match self {
            Specialist::Cardiologist => "Cardiologist",
            Specialist::Neurologist => "Neurologist",
            Specialist::Pulmonologist => "Pulmonologist",
            Specialist::Gastroenterologist => "Gastroenterologist",
            Specialist::EmergencyPhysician => "Emergency Physician",
            Specialist::GeneralPhysician => "General Physician",
            Specialist::Nephrologist => "Nephrologist",
            Specialist::Endocrinologist => "Endocrinologist",
            Specialist::OrthopedicSurgeon => "Orthopedic Surgeon",
            Specialist::Dermatologist => "Dermatologist",
            Specialist::EntSpecialist => "ENT Specialist",
            Specialist::Gynecologist => "Gynecologist",
            Specialist::Psychiatrist => "Psychiatrist",
            Specialist::InfectiousDiseaseSpecialist => "Infectious Disease Specialist",
        }
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
