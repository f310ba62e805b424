use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::health::{health, liveness};
use super::metrics::prometheus_metrics;
use super::notify::send_to_topic;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Liveness & Health
        .route("/", get(liveness))
        .route("/health", get(health))
        .route("/metrics", get(prometheus_metrics))
        // Notification endpoints
        .route("/send-to-topic", post(send_to_topic))
}
