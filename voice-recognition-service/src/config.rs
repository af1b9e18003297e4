use serde::{Deserialize, Serialize};

use crate::error::{VoiceError, VoiceResult};

pub const DEFAULT_WHISPER_URL: &str = "http://localhost:9000";
pub const DEFAULT_WHISPER_MODEL: &str = "small";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "whisper-1";
/// 25 MiB, the upload limit of hosted Whisper APIs
pub const DEFAULT_MAX_AUDIO_BYTES: usize = 25 * 1024 * 1024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Provider-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoiceProvider {
    /// Self-hosted whisper-asr-webservice, audio never leaves the network
    Whisper {
        api_url: String,
        api_key: Option<String>,
        model_size: Option<String>, // e.g. "base", "small", "medium", "large-v3"
    },
    /// OpenAI or any server exposing `/v1/audio/transcriptions`
    #[serde(rename = "openai")]
    OpenAi {
        api_url: String,
        api_key: String,
        model: String,
    },
}

impl VoiceProvider {
    pub fn name(&self) -> &'static str {
        match self {
            VoiceProvider::Whisper { .. } => "whisper",
            VoiceProvider::OpenAi { .. } => "openai",
        }
    }
}

/// Voice recognition service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VoiceConfig {
    pub provider: VoiceProvider,
    pub voice_enabled: bool,
    pub max_audio_bytes: usize,
    pub timeout_secs: u64,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: VoiceProvider::Whisper {
                api_url: DEFAULT_WHISPER_URL.to_string(),
                api_key: None,
                model_size: Some(DEFAULT_WHISPER_MODEL.to_string()),
            },
            voice_enabled: true,
            max_audio_bytes: DEFAULT_MAX_AUDIO_BYTES,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl VoiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> VoiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(var: F) -> VoiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let voice_enabled = var("VOICE_ENABLED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let max_audio_bytes = var("VOICE_MAX_AUDIO_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_AUDIO_BYTES);

        let timeout_secs = var("VOICE_TIMEOUT_SECS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let provider_type = var("VOICE_PROVIDER").unwrap_or_else(|| "whisper".to_string());
        let provider = match provider_type.trim().to_lowercase().as_str() {
            "whisper" => VoiceProvider::Whisper {
                api_url: var("WHISPER_API_URL").unwrap_or_else(|| DEFAULT_WHISPER_URL.to_string()),
                api_key: var("WHISPER_API_KEY"),
                model_size: Some(
                    var("WHISPER_MODEL_SIZE").unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
                ),
            },
            "openai" => VoiceProvider::OpenAi {
                api_url: var("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_OPENAI_URL.to_string()),
                api_key: var("OPENAI_API_KEY")
                    .filter(|k| !k.trim().is_empty())
                    .ok_or_else(|| {
                        VoiceError::Config("OPENAI_API_KEY is required for the openai provider".to_string())
                    })?,
                model: var("OPENAI_TRANSCRIBE_MODEL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            },
            other => {
                return Err(VoiceError::Config(format!("Unknown voice provider: {other}")));
            }
        };

        let config = Self {
            provider,
            voice_enabled,
            max_audio_bytes,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> VoiceResult<()> {
        if self.max_audio_bytes == 0 {
            return Err(VoiceError::Config("VOICE_MAX_AUDIO_BYTES must be positive".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(VoiceError::Config("VOICE_TIMEOUT_SECS must be positive".to_string()));
        }
        let api_url = match &self.provider {
            VoiceProvider::Whisper { api_url, .. } | VoiceProvider::OpenAi { api_url, .. } => api_url,
        };
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(VoiceError::Config(format!("Invalid provider URL: {api_url}")));
        }
        Ok(())
    }
}
