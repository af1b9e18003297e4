use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use error_common::{codes, ErrorContext, ErrorPayload};
use thiserror::Error;
use tracing::{error, warn};
use voice_recognition_service::VoiceError;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { code: &'static str, message: String },

    #[error("Request body too large: {message}")]
    PayloadTooLarge { message: String },

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { code: &'static str, message: String },

    #[error("Upstream service failed: {message}")]
    BadGateway { code: &'static str, message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: codes::validation::INVALID_INPUT,
            message: message.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::BadRequest {
            code: codes::validation::MISSING_REQUIRED_FIELD,
            message: format!("Missing required field '{field}'"),
        }
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge {
            message: message.into(),
        }
    }

    pub fn service_unavailable(code: &'static str, message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            code,
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { code, .. }
            | ApiError::ServiceUnavailable { code, .. }
            | ApiError::BadGateway { code, .. } => code,
            ApiError::PayloadTooLarge { .. } => codes::validation::PAYLOAD_TOO_LARGE,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::PayloadTooLarge { .. } => "payload_too_large",
            ApiError::ServiceUnavailable { .. } => "service_unavailable",
            ApiError::BadGateway { .. } => "bad_gateway",
        }
    }

    /// Map an extractor rejection, keeping axum's 413 for oversized bodies
    fn from_rejection(status: StatusCode, body_text: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            Self::payload_too_large(body_text)
        } else {
            Self::bad_request(body_text)
        }
    }
}

impl From<VoiceError> for ApiError {
    fn from(err: VoiceError) -> Self {
        let code = err.error_code();
        let message = err.to_string();
        match err {
            VoiceError::Disabled | VoiceError::Config(_) => Self::ServiceUnavailable { code, message },
            VoiceError::AudioProcessing(_) => Self::BadRequest { code, message },
            VoiceError::Provider(_)
            | VoiceError::Authentication(_)
            | VoiceError::Transcription(_)
            | VoiceError::Network(_)
            | VoiceError::Serialization(_) => Self::BadGateway { code, message },
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::from_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::from_rejection(err.status(), err.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let payload = ErrorPayload::new(self.error_code(), self.to_string())
            .with_context(ErrorContext::new().add_context("error_type", self.error_type()));

        if status_code.is_server_error() {
            error!(
                error_id = %payload.error_id,
                error_type = %self.error_type(),
                status_code = %status_code.as_u16(),
                error = %logger_redacted::redact(&payload.error),
                "API error occurred"
            );
        } else {
            warn!(
                error_id = %payload.error_id,
                error_type = %self.error_type(),
                status_code = %status_code.as_u16(),
                "Request rejected"
            );
        }

        (status_code, Json(payload)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
