use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_FILE_NAME: &str = "audio.wav";

/// Uploaded audio clip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub data: Vec<u8>,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl AudioPayload {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            filename: None,
            content_type: None,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// File name sent to the provider; client paths are stripped
    pub fn file_name(&self) -> &str {
        self.filename
            .as_deref()
            .and_then(|name| name.rsplit(|c: char| c == '/' || c == '\\').next())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_FILE_NAME)
    }
}

/// Transcription result from voice recognition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub id: Uuid,
    pub text: String,
    /// Spoken language when the provider reports it
    pub language: Option<String>,
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
    pub metadata: TranscriptionMetadata,
}

/// Metadata associated with transcription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionMetadata {
    pub provider: String,
    pub model: Option<String>,
    pub audio_bytes: usize,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>, provider: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language: None,
            duration_ms: 0,
            created_at: Utc::now(),
            metadata: TranscriptionMetadata {
                provider: provider.to_string(),
                model: None,
                audio_bytes: 0,
            },
        }
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language.filter(|l| !l.trim().is_empty());
        self
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.metadata.model = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_client_paths() {
        let audio = AudioPayload::new(vec![1, 2, 3]).with_filename("C:\\Users\\me\\voice note.m4a");
        assert_eq!(audio.file_name(), "voice note.m4a");

        let audio = AudioPayload::new(vec![1]).with_filename("/tmp/clip.ogg");
        assert_eq!(audio.file_name(), "clip.ogg");

        assert_eq!(AudioPayload::new(vec![1]).file_name(), "audio.wav");
        assert_eq!(AudioPayload::new(vec![1]).with_filename("uploads/").file_name(), "audio.wav");
    }

    #[test]
    fn test_blank_language_dropped() {
        let result = TranscriptionResult::new("chest pain", "whisper").with_language(Some(" ".to_string()));
        assert!(result.language.is_none());
    }
}
