use std::time::Instant;

use axum::{extract::Request, http::Method, middleware::Next, response::Response};
use tower_http::cors::{Any, CorsLayer};

/// Request timing middleware
pub async fn request_timing_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        duration_ms = start.elapsed().as_millis(),
        status = response.status().as_u16(),
        "Request processed"
    );

    response
}

/// CORS for browser front ends served from any origin
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
