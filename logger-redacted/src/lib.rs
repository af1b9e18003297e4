//! PHI-safe logging for the symptom triage service
//!
//! Symptom descriptions are protected health information. They must never reach
//! a log sink verbatim, so this crate offers two tools:
//!
//! - **Fingerprints**: [`fingerprint`] turns a text into a short SHA-256 based
//!   hash so that a request can be correlated across log lines without
//!   exposing what the patient said. The [`phi_info!`] and [`phi_debug!`]
//!   macros attach it as the `text_fingerprint` field.
//! - **Redaction**: [`redact`] scrubs emails, phone numbers, SSNs, card numbers
//!   and IP addresses from error messages returned by collaborators.
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{init_logging, phi_info, LoggerConfig};
//!
//! init_logging(&LoggerConfig::default()).ok();
//!
//! let text = "I have severe chest pain";
//! phi_info!(text, phrases = 1, "Symptom text received");
//! // Output: INFO Symptom text received text_fingerprint=Xk2v... phrases=1
//! ```

pub mod redactor;
pub mod macros;
pub mod config;

pub use redactor::*;
pub use config::*;

use std::sync::atomic::{AtomicBool, Ordering};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

lazy_static! {
    static ref DEFAULT_REDACTOR: PiiRedactor = PiiRedactor::new(RedactionConfig::default());
}

static REDACTION_ENABLED: AtomicBool = AtomicBool::new(true);

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns [`LoggerError`] when the filter directive is invalid or a global
/// subscriber has already been set.
pub fn init_logging(config: &LoggerConfig) -> Result<(), LoggerError> {
    REDACTION_ENABLED.store(config.redaction_enabled, Ordering::Relaxed);

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.filter_directive())
            .map_err(|e| LoggerError::Filter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().with_target(false).with_ansi(false).json())
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init(),
    };

    result.map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

/// Correlation hash of a symptom text, safe to log
pub fn fingerprint(text: &str) -> String {
    DEFAULT_REDACTOR.fingerprint(text)
}

/// Scrub identifiers from a message unless redaction was disabled at init
pub fn redact(text: &str) -> String {
    if REDACTION_ENABLED.load(Ordering::Relaxed) {
        DEFAULT_REDACTOR.redact(text)
    } else {
        text.to_string()
    }
}
