//! Topic notification handler

use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::metrics::RelayMetrics;
use crate::server::AppState;

use super::payload::NotificationPayload;

/// Response for a notification the provider accepted
#[derive(Debug, Serialize)]
pub struct SendToTopicResponse {
    pub success: bool,
    /// Human-readable confirmation naming the topic
    pub message: String,
    /// Provider response, passed through unchanged
    pub response: String,
}

/// Send a notification to every device subscribed to a topic
#[tracing::instrument(name = "http.send_to_topic", skip_all)]
pub async fn send_to_topic(
    State(state): State<AppState>,
    NotificationPayload(request): NotificationPayload,
) -> Result<Json<SendToTopicResponse>> {
    let notification = request.validate().inspect_err(|_| RelayMetrics::record_rejected())?;
    let message = notification.to_message();

    let started = Instant::now();
    let result = state.sender.send(&message).await;
    RelayMetrics::observe_delivery(started.elapsed());

    match result {
        Ok(response) => {
            RelayMetrics::record_sent();
            tracing::info!(
                topic = %notification.topic,
                response = %response,
                "Notification sent"
            );

            Ok(Json(SendToTopicResponse {
                success: true,
                message: format!("Notification sent to topic '{}'", notification.topic),
                response,
            }))
        }
        Err(e) => {
            RelayMetrics::record_failed();
            tracing::error!(
                topic = %notification.topic,
                error = %e,
                "Notification delivery failed"
            );
            Err(AppError::Delivery(e))
        }
    }
}
