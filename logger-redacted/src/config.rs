// Logger configuration
use serde::{Deserialize, Serialize};

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for development
    Pretty,
    /// Structured JSON lines for production
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub redaction_enabled: bool,
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            redaction_enabled: true,
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LoggerConfig {
    /// Load configuration from `LOG_LEVEL`, `LOG_FORMAT` and `LOG_REDACTION`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_level = std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") => LogFormat::Json,
            _ => defaults.format,
        };

        let redaction_enabled = std::env::var("LOG_REDACTION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.redaction_enabled);

        Self {
            redaction_enabled,
            log_level,
            format,
        }
    }

    /// Verbose override used by the `--verbose` CLI flag
    pub fn verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_level = "debug".to_string();
        }
        self
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub fn filter_directive(&self) -> String {
        let level = &self.log_level;
        format!(
            "triage_server={level},triage_engine={level},translation_service={level},\
             voice_recognition_service={level},tower_http=info,hyper=info,reqwest=info"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_uses_level() {
        let config = LoggerConfig::default().verbose(true);
        let directive = config.filter_directive();
        assert!(directive.starts_with("triage_server=debug"));
        assert!(directive.contains("triage_engine=debug"));
        assert!(directive.contains("tower_http=info"));
    }
}
