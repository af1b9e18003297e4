pub mod openai;
pub mod whisper;

use std::time::Duration;

use async_trait::async_trait;

use crate::config::{VoiceConfig, VoiceProvider};
use crate::error::{VoiceError, VoiceResult};
use crate::transcription::{AudioPayload, TranscriptionResult};

/// Trait for voice recognition providers
#[async_trait]
pub trait VoiceProviderTrait: Send + Sync {
    /// Short provider name used in logs and metadata
    fn name(&self) -> &'static str;

    /// Transcribe an audio clip to text
    async fn transcribe(&self, audio: &AudioPayload) -> VoiceResult<TranscriptionResult>;
}

/// Create a provider instance based on configuration
pub fn create_provider(config: &VoiceConfig) -> VoiceResult<Box<dyn VoiceProviderTrait>> {
    let timeout = Duration::from_secs(config.timeout_secs);
    match &config.provider {
        VoiceProvider::Whisper { .. } => Ok(Box::new(whisper::WhisperProvider::new(&config.provider, timeout)?)),
        VoiceProvider::OpenAi { .. } => Ok(Box::new(openai::OpenAiProvider::new(&config.provider, timeout)?)),
    }
}

pub(crate) fn http_client(timeout: Duration) -> VoiceResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| VoiceError::Config(format!("Failed to build HTTP client: {e}")))
}

/// Multipart file part carrying the audio clip
pub(crate) fn audio_part(audio: &AudioPayload) -> VoiceResult<reqwest::multipart::Part> {
    let part = reqwest::multipart::Part::bytes(audio.data.clone()).file_name(audio.file_name().to_string());
    match &audio.content_type {
        Some(content_type) => part
            .mime_str(content_type)
            .map_err(|e| VoiceError::AudioProcessing(format!("Invalid content type {content_type}: {e}"))),
        None => Ok(part),
    }
}

/// Turn a non-success provider response into an error
pub(crate) async fn check_status(provider: &str, response: reqwest::Response) -> VoiceResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = format!("{provider} returned {status}: {}", body.trim());
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        Err(VoiceError::Authentication(message))
    } else {
        Err(VoiceError::Provider(message))
    }
}

pub(crate) fn trim_base_url(url: &str) -> &str {
    url.trim_end_matches('/')
}
