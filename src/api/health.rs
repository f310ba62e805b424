use axum::Json;
use serde::Serialize;

/// Plain-text body of `GET /`.
pub const LIVENESS_MESSAGE: &str = "Topic push relay is running!";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
