use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::server::TriageServer;

/// Banner returned by `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime: u64,
    pub checks: HashMap<String, String>,
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "API Running.".to_string(),
    })
}

/// Health check handler
pub async fn health_check(State(server): State<TriageServer>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    let tables = server.pipeline.engine().tables();
    checks.insert(
        "triage_engine".to_string(),
        format!(
            "healthy ({} critical symptoms, {} department keywords)",
            tables.vocabulary.len(),
            tables.departments.len()
        ),
    );

    let voice = match &server.voice {
        Some(voice) if voice.is_enabled() => format!("enabled ({})", voice.provider_name()),
        Some(_) => "disabled".to_string(),
        None => "unavailable".to_string(),
    };
    checks.insert("voice_recognition".to_string(), voice);

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: server.uptime_secs(),
        checks,
    })
}
