use axum::{
    extract::{multipart::MultipartRejection, rejection::FormRejection, Multipart, State},
    Form, Json,
};
use error_common::codes;
use serde::{Deserialize, Serialize};
use triage_engine::TriageRecord;
use voice_recognition_service::AudioPayload;

use crate::error::{ApiError, ApiResult};
use crate::server::TriageServer;

/// Form field carrying the symptom description
pub const TEXT_FIELD: &str = "text";

/// Multipart field carrying the audio clip
pub const AUDIO_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextForm {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TextAnalysisResponse {
    pub analysis: TriageRecord,
}

#[derive(Debug, Serialize)]
pub struct AudioAnalysisResponse {
    pub transcribed_text: String,
    pub analysis: TriageRecord,
}

/// `POST /analyze-text/`
///
/// An empty `text` is valid input and classifies as Normal; only a missing
/// field is rejected.
pub async fn analyze_text(
    State(server): State<TriageServer>,
    form: Result<Form<AnalyzeTextForm>, FormRejection>,
) -> ApiResult<Json<TextAnalysisResponse>> {
    let Form(form) = form?;
    let text = form.text.ok_or_else(|| ApiError::missing_field(TEXT_FIELD))?;

    let analysis = server.pipeline.classify(&text).await;
    Ok(Json(TextAnalysisResponse { analysis }))
}

/// `POST /analyze-audio/`
pub async fn analyze_audio(
    State(server): State<TriageServer>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<AudioAnalysisResponse>> {
    let voice = server.voice_service().ok_or_else(|| {
        ApiError::service_unavailable(
            codes::transcription::SERVICE_UNAVAILABLE,
            "Voice recognition is not enabled",
        )
    })?;

    let audio = read_audio_field(multipart?).await?;
    let transcription = voice.transcribe_audio(audio).await?;
    let analysis = server.pipeline.classify(&transcription.text).await;

    Ok(Json(AudioAnalysisResponse {
        transcribed_text: transcription.text,
        analysis,
    }))
}

/// First `file` field of the upload; other fields are ignored
async fn read_audio_field(mut multipart: Multipart) -> ApiResult<AudioPayload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        let mut audio = AudioPayload::new(data.to_vec());
        if let Some(filename) = filename {
            audio = audio.with_filename(filename);
        }
        if let Some(content_type) = content_type {
            audio = audio.with_content_type(content_type);
        }
        return Ok(audio);
    }

    Err(ApiError::missing_field(AUDIO_FIELD))
}
