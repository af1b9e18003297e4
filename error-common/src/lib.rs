//! Common error handling utilities for the symptom triage service
//!
//! This crate provides the error types, error codes and the structured error
//! payload shared by the triage server and its collaborator crates. Failures
//! are never raised to the transport layer as bare strings; they are reported
//! as an [`ErrorPayload`] carrying a stable code and a correlation id.
//!
//! # Error Categories
//!
//! - **Validation**: malformed requests (missing form fields, empty uploads)
//! - **Transcription**: speech-to-text provider failures
//! - **External**: network failures reaching collaborators
//! - **Configuration**: invalid environment, unreadable triage tables
//! - **Internal**: server failures and everything else
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, ErrorContext, ErrorPayload, ServiceError};
//!
//! let error = ServiceError::ValidationError("missing form field `text`".to_string());
//! let payload = ErrorPayload::from_error(&error)
//!     .with_context(ErrorContext::new().with_request_id("req-42".to_string()));
//!
//! assert_eq!(payload.error_code, codes::validation::INVALID_INPUT);
//! assert!(payload.error.contains("text"));
//! ```

pub mod types;
pub mod context;
pub mod codes;
pub mod payload;

pub use types::*;
pub use context::*;
pub use payload::*;
