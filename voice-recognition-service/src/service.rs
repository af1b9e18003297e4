use logger_redacted::phi_info;
use tracing::{debug, info, warn};

use crate::config::VoiceConfig;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::{create_provider, VoiceProviderTrait};
use crate::transcription::{AudioPayload, TranscriptionResult};

/// Speech-to-text front for spoken symptom descriptions
pub struct VoiceService {
    config: VoiceConfig,
    provider: Box<dyn VoiceProviderTrait>,
}

impl VoiceService {
    /// Create a new voice recognition service
    pub fn new(config: VoiceConfig) -> VoiceResult<Self> {
        config.validate()?;
        let provider = create_provider(&config)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Use an already constructed provider
    pub fn with_provider(config: VoiceConfig, provider: Box<dyn VoiceProviderTrait>) -> Self {
        if config.voice_enabled {
            info!(provider = provider.name(), "Voice recognition service ready");
        } else {
            info!("Voice recognition service disabled by configuration");
        }
        Self { config, provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.voice_enabled
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn max_audio_bytes(&self) -> usize {
        self.config.max_audio_bytes
    }

    /// Reject clips the provider must never see
    pub fn validate(&self, audio: &AudioPayload) -> VoiceResult<()> {
        if !self.config.voice_enabled {
            return Err(VoiceError::Disabled);
        }
        if audio.is_empty() {
            return Err(VoiceError::AudioProcessing("Audio file is empty".to_string()));
        }
        if audio.len() > self.config.max_audio_bytes {
            return Err(VoiceError::AudioProcessing(format!(
                "Audio file is {} bytes, limit is {}",
                audio.len(),
                self.config.max_audio_bytes
            )));
        }
        Ok(())
    }

    /// Transcribe a clip; the returned text is trimmed and may be empty
    pub async fn transcribe_audio(&self, audio: AudioPayload) -> VoiceResult<TranscriptionResult> {
        self.validate(&audio)?;
        debug!(
            audio_bytes = audio.len(),
            content_type = audio.content_type.as_deref().unwrap_or("unknown"),
            provider = self.provider.name(),
            "Transcribing audio"
        );

        let mut result = match self.provider.transcribe(&audio).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    error = %logger_redacted::redact(&e.to_string()),
                    "Transcription failed"
                );
                return Err(e);
            }
        };

        result.text = result.text.trim().to_string();
        result.metadata.audio_bytes = audio.len();

        phi_info!(
            &result.text,
            provider = self.provider.name(),
            duration_ms = result.duration_ms,
            language = result.language.as_deref().unwrap_or("unknown"),
            "Audio transcribed"
        );
        Ok(result)
    }
}
