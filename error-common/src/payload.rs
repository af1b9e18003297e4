//! Structured error payload returned to clients instead of transport errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::context::ErrorContext;
use crate::types::ServiceError;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable message
    pub error: String,
    /// Stable error code, see [`crate::codes`]
    pub error_code: String,
    /// Unique id for correlating the response with server logs
    pub error_id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,
}

impl ErrorPayload {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            error_code: code.to_string(),
            error_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            context: None,
        }
    }

    pub fn from_error(error: &ServiceError) -> Self {
        Self::new(error.code(), error.to_string())
    }

    /// Attach request context; an empty context is dropped
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = (!context.is_empty()).then_some(context);
        self
    }
}
