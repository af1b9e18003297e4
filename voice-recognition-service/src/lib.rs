//! Voice Recognition Service for spoken symptom descriptions
//!
//! Turns an uploaded audio clip into text that the triage engine classifies
//! exactly like typed input. Privacy-first: the default provider is a
//! self-hosted Whisper server, so audio never leaves the deployment.
//!
//! # Providers
//!
//! 1. **Whisper** - whisper-asr-webservice, default, self-hosted
//! 2. **OpenAI** - any server implementing `/v1/audio/transcriptions`
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use voice_recognition_service::{AudioPayload, VoiceConfig, VoiceService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = VoiceConfig::from_env()?;
//! let voice_service = VoiceService::new(config)?;
//!
//! let audio = AudioPayload::new(std::fs::read("symptoms.wav")?).with_filename("symptoms.wav");
//! let transcription = voice_service.transcribe_audio(audio).await?;
//!
//! println!("Transcription: {}", transcription.text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod providers;
pub mod service;
pub mod transcription;

pub use config::*;
pub use error::*;
pub use providers::VoiceProviderTrait;
pub use service::*;
pub use transcription::*;
