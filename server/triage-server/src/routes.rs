pub mod paths;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::{analysis, health},
    server::TriageServer,
};

/// Create health check routes
pub fn health_routes() -> Router<TriageServer> {
    Router::new()
        .route(paths::ROOT, get(health::root))
        .route(paths::health::HEALTH, get(health::health_check))
}

/// Create triage routes, reachable with and without the trailing slash
pub fn analysis_routes() -> Router<TriageServer> {
    Router::new()
        .route(paths::analysis::ANALYZE_TEXT, post(analysis::analyze_text))
        .route(paths::analysis::ANALYZE_TEXT_NO_SLASH, post(analysis::analyze_text))
        .route(paths::analysis::ANALYZE_AUDIO, post(analysis::analyze_audio))
        .route(paths::analysis::ANALYZE_AUDIO_NO_SLASH, post(analysis::analyze_audio))
}

/// Create all routes
pub fn create_routes() -> Router<TriageServer> {
    Router::new().merge(health_routes()).merge(analysis_routes())
}
