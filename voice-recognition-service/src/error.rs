use error_common::codes;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Voice recognition is disabled")]
    Disabled,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Audio processing error: {0}")]
    AudioProcessing(String),

    #[error("Transcription error: {0}")]
    Transcription(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VoiceError {
    /// Stable error code reported to clients
    pub fn error_code(&self) -> &'static str {
        match self {
            VoiceError::Disabled => codes::transcription::SERVICE_UNAVAILABLE,
            VoiceError::Config(_) => codes::configuration::INVALID_CONFIG,
            VoiceError::AudioProcessing(_) => codes::transcription::INVALID_AUDIO,
            VoiceError::Network(_) => codes::external::NETWORK_FAILURE,
            VoiceError::Provider(_)
            | VoiceError::Authentication(_)
            | VoiceError::Transcription(_)
            | VoiceError::Serialization(_) => codes::transcription::PROVIDER_FAILED,
        }
    }

    /// True when the failure lies with the caller's audio rather than the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, VoiceError::AudioProcessing(_))
    }
}

pub type VoiceResult<T> = Result<T, VoiceError>;
