//! FCM HTTP v1 message types for topic notifications.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marker placed in `data.messageType` so clients can route the payload.
pub const MESSAGE_TYPE_TOPIC: &str = "topic-notification";

/// APNs priority for immediate delivery.
pub const APNS_PRIORITY_IMMEDIATE: &str = "10";

/// A complete message as accepted by `projects.messages.send`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Topic name, without the `/topics/` prefix
    pub topic: String,
    /// Display notification shown by the OS
    pub notification: Notification,
    /// Custom key/value payload delivered to the app
    pub data: MessageData,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Data payload. FCM requires every value to be a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageData {
    pub title: String,
    pub body: String,
    pub sender_name: String,
    pub sender_photo_url: String,
    /// ISO-8601 UTC timestamp taken when the message was built
    pub send_at: String,
    pub message_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndroidConfig {
    pub priority: AndroidPriority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AndroidPriority {
    #[default]
    Normal,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApnsConfig {
    pub headers: BTreeMap<String, String>,
}

impl AndroidConfig {
    pub fn high_priority() -> Self {
        Self {
            priority: AndroidPriority::High,
        }
    }
}

impl ApnsConfig {
    /// APNs config requesting immediate delivery (`apns-priority: 10`).
    pub fn immediate() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            "apns-priority".to_string(),
            APNS_PRIORITY_IMMEDIATE.to_string(),
        );
        Self { headers }
    }
}
