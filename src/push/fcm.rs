//! Firebase Cloud Messaging HTTP v1 client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::FcmConfig;

use super::{
    CredentialsError, DeliveryError, Message, MessageSender, ServiceAccountKey, TokenSource,
};

#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a Message,
}

#[derive(Deserialize)]
struct SendResponse {
    name: String,
}

/// Google API error envelope: `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct FcmClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: TokenSource,
}

impl FcmClient {
    pub fn new(key: &ServiceAccountKey, config: &FcmConfig) -> Result<Self, CredentialsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let endpoint = format!(
            "{}/v1/projects/{}/messages:send",
            config.base_url.trim_end_matches('/'),
            key.project_id
        );

        Ok(Self {
            tokens: TokenSource::new(key, http.clone())?,
            http,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn provider_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!("FCM returned {}", status),
        Err(_) => format!("FCM returned {}: {}", status, body.trim()),
    }
}

#[async_trait]
impl MessageSender for FcmClient {
    #[instrument(name = "fcm.send", skip(self, message), fields(topic = %message.topic))]
    async fn send(&self, message: &Message) -> Result<String, DeliveryError> {
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&SendRequest { message })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let sent: SendResponse = response.json().await?;
            tracing::debug!(name = %sent.name, "FCM accepted message");
            return Ok(sent.name);
        }

        let body = response.text().await.unwrap_or_default();
        let error = provider_error_message(status, &body);
        tracing::warn!(status = %status, error = %error, "FCM rejected message");
        Err(DeliveryError::Provider(error))
    }
}
