//! OpenAI Whisper Provider - open-source, self-hosted, fully private
//!
//! Talks to a whisper-asr-webservice deployment. The model size is chosen when
//! that service starts; it is recorded here for transcript metadata only.
use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::VoiceProvider;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::{audio_part, check_status, http_client, trim_base_url, VoiceProviderTrait};
use crate::transcription::{AudioPayload, TranscriptionResult};

const PROVIDER_NAME: &str = "whisper";

#[derive(Debug, Deserialize)]
struct AsrResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
}

pub struct WhisperProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model_size: Option<String>,
}

impl WhisperProvider {
    pub fn new(config: &VoiceProvider, timeout: Duration) -> VoiceResult<Self> {
        let VoiceProvider::Whisper {
            api_url,
            api_key,
            model_size,
        } = config
        else {
            return Err(VoiceError::Config(format!(
                "Whisper provider cannot be built from {} settings",
                config.name()
            )));
        };

        Ok(Self {
            client: http_client(timeout)?,
            api_url: api_url.clone(),
            api_key: api_key.clone(),
            model_size: model_size.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/asr", trim_base_url(&self.api_url))
    }

    fn parse_response(body: &str) -> VoiceResult<AsrResponse> {
        Ok(serde_json::from_str(body)?)
    }
}

#[async_trait]
impl VoiceProviderTrait for WhisperProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn transcribe(&self, audio: &AudioPayload) -> VoiceResult<TranscriptionResult> {
        let started = Instant::now();
        let form = reqwest::multipart::Form::new().part("audio_file", audio_part(audio)?);

        let mut request = self
            .client
            .post(self.endpoint())
            .query(&[("task", "transcribe"), ("output", "json")])
            .multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = check_status(PROVIDER_NAME, request.send().await?).await?;
        let body = response.text().await?;
        let parsed = Self::parse_response(&body)?;

        let mut result = TranscriptionResult::new(parsed.text, PROVIDER_NAME)
            .with_language(parsed.language)
            .with_model(self.model_size.clone());
        result.duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        Ok(result)
    }
}
