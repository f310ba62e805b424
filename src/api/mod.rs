//! API layer - HTTP endpoint handlers.

mod health;
mod metrics;
mod notify;
mod payload;
mod routes;

pub use health::{health, liveness, HealthResponse, LIVENESS_MESSAGE};
pub use metrics::prometheus_metrics;
pub use notify::{send_to_topic, SendToTopicResponse};
pub use payload::NotificationPayload;
pub use routes::api_routes;
