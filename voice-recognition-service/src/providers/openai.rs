// OpenAI-compatible transcription API (`/v1/audio/transcriptions`)
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::VoiceProvider;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::{audio_part, check_status, http_client, trim_base_url, VoiceProviderTrait};
use crate::transcription::{AudioPayload, TranscriptionResult};

const PROVIDER_NAME: &str = "openai";

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
}

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(config: &VoiceProvider, timeout: Duration) -> VoiceResult<Self> {
        let VoiceProvider::OpenAi {
            api_url,
            api_key,
            model,
        } = config
        else {
            return Err(VoiceError::Config(format!(
                "OpenAI provider cannot be built from {} settings",
                config.name()
            )));
        };

        if api_key.trim().is_empty() {
            return Err(VoiceError::Config("OpenAI API key is empty".to_string()));
        }

        Ok(Self {
            client: http_client(timeout)?,
            api_url: api_url.clone(),
            api_key: api_key.clone(),
            model: model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/audio/transcriptions", trim_base_url(&self.api_url))
    }

    fn parse_response(body: &str) -> VoiceResult<TranscriptionResponse> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl VoiceProviderTrait for OpenAiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn transcribe(&self, audio: &AudioPayload) -> VoiceResult<TranscriptionResult> {
        let started = Instant::now();
        let form = reqwest::multipart::Form::new()
            .part("file", audio_part(audio)?)
            .text("model", self.model.clone())
            .text("response_format", "json");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;
        let response = check_status(PROVIDER_NAME, response).await?;
        let parsed = Self::parse_response(&response.text().await?)?;

        let mut result = TranscriptionResult::new(parsed.text, PROVIDER_NAME)
            .with_language(parsed.language)
            .with_model(Some(self.model.clone()));
        result.duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: &str) -> VoiceProvider {
        VoiceProvider::OpenAi {
            api_url: "https://api.openai.com/".to_string(),
            api_key: api_key.to_string(),
            model: "whisper-1".to_string(),
        }
    }

    #[test]
    fn test_endpoint() {
        let provider = OpenAiProvider::new(&config("sk-test"), Duration::from_secs(5)).unwrap();
        assert_eq!(provider.endpoint(), "https://api.openai.com/v1/audio/transcriptions");
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            OpenAiProvider::new(&config("  "), Duration::from_secs(5)),
            Err(VoiceError::Config(_))
        ));
    }

    #[test]
    fn test_parses_json_response() {
        let parsed = OpenAiProvider::parse_response(r#"{"text":"I cannot breathe"}"#).unwrap();
        assert_eq!(parsed.text, "I cannot breathe");
        assert!(OpenAiProvider::parse_response(r#"{"error":{"message":"bad"}}"#).is_err());
    }
}
