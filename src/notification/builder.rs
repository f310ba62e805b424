use chrono::{SecondsFormat, Utc};

use crate::push::{
    AndroidConfig, ApnsConfig, Message, MessageData, Notification, MESSAGE_TYPE_TOPIC,
};

/// Sender name used when the request does not provide one.
pub const DEFAULT_SENDER_NAME: &str = "Admin";

/// Builder for topic notification messages
#[derive(Debug, Clone)]
pub struct NotificationBuilder {
    topic: String,
    title: String,
    body: String,
    sender_name: Option<String>,
    sender_photo_url: Option<String>,
}

impl NotificationBuilder {
    /// Create a new builder for a topic with display title and body
    pub fn new(
        topic: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            title: title.into(),
            body: body.into(),
            sender_name: None,
            sender_photo_url: None,
        }
    }

    /// Set the sender name shown in the data payload
    pub fn sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }

    /// Set the sender avatar URL
    pub fn sender_photo_url(mut self, url: impl Into<String>) -> Self {
        self.sender_photo_url = Some(url.into());
        self
    }

    /// Build the message, stamping `sendAt` with the current time
    pub fn build(self) -> Message {
        let sender_name = self
            .sender_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_SENDER_NAME.to_string());

        Message {
            topic: self.topic,
            notification: Notification {
                title: self.title.clone(),
                body: self.body.clone(),
            },
            data: MessageData {
                title: self.title,
                body: self.body,
                sender_name,
                sender_photo_url: self.sender_photo_url.unwrap_or_default(),
                send_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                message_type: MESSAGE_TYPE_TOPIC.to_string(),
            },
            android: AndroidConfig::high_priority(),
            apns: ApnsConfig::immediate(),
        }
    }
}
