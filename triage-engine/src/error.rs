use thiserror::Error;

/// Errors raised while building or configuring the triage engine
///
/// Classification itself is total and never fails; these errors only surface
/// at startup, when tables and settings are loaded.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Invalid match threshold {0}: must be between 0.0 and 1.0")]
    InvalidThreshold(f64),

    #[error("Invalid value for {key}: {message}")]
    InvalidConfig { key: String, message: String },

    #[error("Invalid triage tables: {0}")]
    InvalidTables(String),

    #[error("Unknown department: {0}")]
    UnknownDepartment(String),

    #[error("Failed to read triage tables from {path}: {source}")]
    TablesIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse triage tables: {0}")]
    TablesParse(#[from] serde_yaml::Error),

    #[error("Invalid phrase delimiter: {0}")]
    Delimiter(#[from] regex::Error),
}

pub type TriageResult<T> = Result<T, TriageError>;

/// Failure reported by a language detection or translation collaborator
///
/// The pipeline never propagates these: detection falls back to English and
/// translation falls back to the original text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageServiceError {
    #[error("Language detection failed: {0}")]
    Detection(String),

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Language service unavailable: {0}")]
    Unavailable(String),
}
