//! Symptom Triage Server - HTTP front end for the triage engine
//!
//! Accepts free-text or recorded symptom descriptions and answers with a
//! triage record: severity, routed departments, a likely condition and the
//! specialist to see. Every failure is answered with the structured
//! [`error_common::ErrorPayload`].

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

// Re-export commonly used types
pub use error::*;
pub use server::{ServerConfig, TriageServer};

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: TriageServer) -> Router {
    let body_limit = server.body_limit();
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(server)
}
