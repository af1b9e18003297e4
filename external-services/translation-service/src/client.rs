//! LibreTranslate HTTP client
//!
//! Implements both language collaborators of the triage pipeline against a
//! self-hosted LibreTranslate instance, so symptom text stays on premises.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use triage_engine::{LanguageDetector, LanguageServiceError, Translator, ENGLISH};

use crate::config::{TranslationConfig, TranslationConfigError};

/// One candidate from `/detect`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct LibreTranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslationConfigError> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslationConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn post_checked(
        &self,
        request: reqwest::RequestBuilder,
        to_error: fn(String) -> LanguageServiceError,
    ) -> Result<String, LanguageServiceError> {
        let response = request
            .send()
            .await
            .map_err(|e| LanguageServiceError::Unavailable(format!("LibreTranslate request error: {e}")))?;

        let status = response.status();
        let body = response.text().await;
        if !status.is_success() {
            let detail = body.unwrap_or_default();
            return Err(to_error(format!("LibreTranslate error {status}: {}", detail.trim())));
        }
        body.map_err(read_error)
    }
}

/// A 2xx response whose body could not be read
fn read_error(error: reqwest::Error) -> LanguageServiceError {
    LanguageServiceError::Unavailable(format!("LibreTranslate response read error: {error}"))
}

/// Highest-confidence language of a `/detect` response
pub fn best_language(body: &str) -> Result<String, LanguageServiceError> {
    let candidates: Vec<DetectedLanguage> = serde_json::from_str(body)
        .map_err(|e| LanguageServiceError::Detection(format!("Response parse error: {e}")))?;

    candidates
        .into_iter()
        .filter(|c| !c.language.trim().is_empty())
        .fold(None::<DetectedLanguage>, |best, candidate| match best {
            Some(top) if top.confidence >= candidate.confidence => Some(top),
            _ => Some(candidate),
        })
        .map(|best| best.language.trim().to_lowercase())
        .ok_or_else(|| LanguageServiceError::Detection("No language detected".to_string()))
}

/// Translated text of a `/translate` response
pub fn translated_text(body: &str) -> Result<String, LanguageServiceError> {
    serde_json::from_str::<TranslateResponse>(body)
        .map(|r| r.translated_text)
        .map_err(|e| LanguageServiceError::Translation(format!("Response parse error: {e}")))
}

#[async_trait]
impl LanguageDetector for LibreTranslateClient {
    async fn detect(&self, text: &str) -> Result<String, LanguageServiceError> {
        let mut form = vec![("q", text)];
        if let Some(key) = &self.api_key {
            form.push(("api_key", key.as_str()));
        }

        let request = self.client.post(self.url("detect")).form(&form);
        let body = self.post_checked(request, LanguageServiceError::Detection).await?;
        let language = best_language(&body)?;
        tracing::debug!(language = %language, "Language detected");
        Ok(language)
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(&self, text: &str, source_language: &str) -> Result<String, LanguageServiceError> {
        let payload = TranslateRequest {
            q: text,
            source: source_language,
            target: ENGLISH,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let request = self.client.post(self.url("translate")).json(&payload);
        let body = self.post_checked(request, LanguageServiceError::Translation).await?;
        let translated = translated_text(&body)?;
        tracing::debug!(source = source_language, "Text translated to English");
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_language_picks_highest_confidence() {
        let body = r#"[{"language":"hi","confidence":62.0},{"language":"ne","confidence":90.0},{"language":"mr","confidence":90.0}]"#;
        assert_eq!(best_language(body).unwrap(), "ne");
    }

    #[test]
    fn test_best_language_errors() {
        assert!(matches!(best_language("[]"), Err(LanguageServiceError::Detection(_))));
        assert!(matches!(
            best_language(r#"{"error":"Invalid request"}"#),
            Err(LanguageServiceError::Detection(_))
        ));
    }

    #[test]
    fn test_translated_text() {
        assert_eq!(
            translated_text(r#"{"translatedText":"chest pain and sweating"}"#).unwrap(),
            "chest pain and sweating"
        );
        assert!(matches!(
            translated_text(r#"{"error":"source language not supported"}"#),
            Err(LanguageServiceError::Translation(_))
        ));
    }

    #[test]
    fn test_translate_request_shape() {
        let payload = TranslateRequest {
            q: "बुखार",
            source: "hi",
            target: ENGLISH,
            format: "text",
            api_key: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["target"], "en");
        assert_eq!(json["format"], "text");
        assert!(json.get("api_key").is_none());
    }

    #[tokio::test]
    async fn test_truncated_success_body_is_unavailable() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            // Promises 64 bytes, sends a few, then hangs up.
            let _ = socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n[{\"language\"")
                .await;
        });

        let config = TranslationConfig {
            enabled: true,
            api_url: format!("http://{addr}"),
            api_key: None,
            timeout_secs: 5,
        };
        let client = LibreTranslateClient::new(&config).unwrap();

        let err = client.detect("fever").await.unwrap_err();
        assert!(matches!(err, LanguageServiceError::Unavailable(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let config = TranslationConfig {
            enabled: true,
            api_url: "http://127.0.0.1:1/".to_string(),
            api_key: None,
            timeout_secs: 2,
        };
        let client = LibreTranslateClient::new(&config).unwrap();
        assert_eq!(client.url("detect"), "http://127.0.0.1:1/detect");

        let err = client.detect("fever").await.unwrap_err();
        assert!(matches!(err, LanguageServiceError::Unavailable(_)));
    }
}
