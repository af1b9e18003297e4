use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use config::{Config, ConfigError, Environment, File};
use error_common::{Result, ServiceError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use translation_service::{build_collaborators, TranslationConfig};
use triage_engine::{EngineConfig, TriageEngine, TriageError, TriagePipeline};
use voice_recognition_service::{VoiceConfig, VoiceService};

/// Body limit when voice recognition is unavailable, matches axum's default
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Room for multipart boundaries and headers on top of the audio itself
pub const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Symptom Triage Engine".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Layered configuration: defaults, then the optional file, then
    /// `TRIAGE_SERVER__*` environment variables
    pub fn load(path: Option<&Path>) -> std::result::Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(Environment::with_prefix("TRIAGE_SERVER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Shared state of the triage HTTP server
#[derive(Clone)]
pub struct TriageServer {
    pub config: ServerConfig,
    pub pipeline: Arc<TriagePipeline>,
    /// `None` when the voice provider could not be configured
    pub voice: Option<Arc<VoiceService>>,
    started_at: Instant,
}

impl TriageServer {
    pub fn new(config: ServerConfig, pipeline: TriagePipeline, voice: Option<VoiceService>) -> Self {
        Self {
            config,
            pipeline: Arc::new(pipeline),
            voice: voice.map(Arc::new),
            started_at: Instant::now(),
        }
    }

    /// Build every component from environment configuration
    ///
    /// Engine and translation misconfiguration abort startup. A broken voice
    /// setup only disables the audio endpoint.
    pub fn from_env(config: ServerConfig) -> Result<Self> {
        let engine_config = EngineConfig::from_env().map_err(engine_error)?;
        let engine = TriageEngine::from_config(&engine_config).map_err(engine_error)?;
        info!(
            threshold = engine.matcher().threshold(),
            custom_tables = engine_config.tables_path.is_some(),
            "Triage engine ready"
        );

        let translation_config = TranslationConfig::from_env()
            .map_err(|e| ServiceError::ConfigError(format!("Invalid translation configuration: {e}")))?;
        let (detector, translator) = build_collaborators(&translation_config)
            .map_err(|e| ServiceError::ConfigError(format!("Failed to build translation client: {e}")))?;
        let pipeline = TriagePipeline::new(Arc::new(engine), detector, translator);

        let voice = match VoiceConfig::from_env().and_then(VoiceService::new) {
            Ok(service) => Some(service),
            Err(e) => {
                warn!(
                    error = %logger_redacted::redact(&e.to_string()),
                    "Voice recognition unavailable, audio endpoint disabled"
                );
                None
            }
        };

        Ok(Self::new(config, pipeline, voice))
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// The enabled voice service, if any
    pub fn voice_service(&self) -> Option<&VoiceService> {
        self.voice.as_deref().filter(|voice| voice.is_enabled())
    }

    /// Largest accepted request body
    pub fn body_limit(&self) -> usize {
        self.voice_service()
            .map_or(DEFAULT_BODY_LIMIT, |voice| {
                voice.max_audio_bytes().saturating_add(MULTIPART_OVERHEAD)
            })
    }
}

/// Table loading failures get their own code, everything else is configuration
fn engine_error(err: TriageError) -> ServiceError {
    match err {
        TriageError::TablesIo { .. } | TriageError::TablesParse(_) | TriageError::InvalidTables(_) => {
            ServiceError::TablesError(err.to_string())
        }
        other => ServiceError::ConfigError(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_tables_file_is_tables_error() {
        let engine_config = EngineConfig {
            tables_path: Some("/nonexistent/triage/tables.yaml".into()),
            ..EngineConfig::default()
        };
        let err = engine_error(TriageEngine::from_config(&engine_config).err().unwrap());
        assert!(matches!(err, ServiceError::TablesError(_)));
        assert_eq!(err.code(), error_common::codes::configuration::TABLES_UNREADABLE);

        let err = engine_error(TriageError::InvalidThreshold(1.5));
        assert_eq!(err.code(), error_common::codes::configuration::INVALID_CONFIG);
    }

    #[test]
    fn test_body_limit_without_voice() {
        let engine = Arc::new(TriageEngine::default());
        let server = TriageServer::new(
            ServerConfig::default(),
            TriagePipeline::english_only(engine),
            None,
        );
        assert!(server.voice_service().is_none());
        assert_eq!(server.body_limit(), DEFAULT_BODY_LIMIT);
    }

    #[test]
    fn test_body_limit_follows_voice_config() {
        let voice_config = VoiceConfig {
            max_audio_bytes: 1024,
            ..VoiceConfig::default()
        };
        let voice = VoiceService::new(voice_config).unwrap();
        let server = TriageServer::new(
            ServerConfig::default(),
            TriagePipeline::english_only(Arc::new(TriageEngine::default())),
            Some(voice),
        );
        assert_eq!(server.body_limit(), 1024 + MULTIPART_OVERHEAD);
    }
}
