use thiserror::Error;

use crate::codes;

/// Process-level error shared by the triage service crates
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server startup and serving errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Request validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Triage tables file missing or malformed
    #[error("Triage tables error: {0}")]
    TablesError(String),

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ServiceError {
    /// Stable error code reported in [`crate::ErrorPayload`]
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::NetworkError(_) => codes::external::NETWORK_FAILURE,
            ServiceError::ServerError(_) => codes::internal::SERVER_FAILURE,
            ServiceError::ValidationError(_) => codes::validation::INVALID_INPUT,
            ServiceError::ConfigError(_) => codes::configuration::INVALID_CONFIG,
            ServiceError::TablesError(_) => codes::configuration::TABLES_UNREADABLE,
            ServiceError::Other(_) => codes::internal::UNEXPECTED,
        }
    }
}

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Log an error with its code and call-site context
pub fn log_error(context: &str, error: &ServiceError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %error,
        "Service error occurred"
    );
}
