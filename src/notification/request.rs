//! Inbound request schema for topic notifications

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::push::Message;

use super::NotificationBuilder;

/// Message returned when a required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "topic, title, and body are required.";

/// Body of `POST /send-to-topic`, as JSON or form fields.
///
/// Every field is optional at this stage; [`NotificationRequest::validate`]
/// decides what is actually required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub topic: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub sender_name: Option<String>,
    pub sender_photo_url: Option<String>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct TopicNotification {
    pub topic: String,
    pub title: String,
    pub body: String,
    pub sender_name: Option<String>,
    pub sender_photo_url: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl NotificationRequest {
    /// Check that `topic`, `title` and `body` are present and non-empty
    pub fn validate(self) -> Result<TopicNotification> {
        match (
            required(self.topic),
            required(self.title),
            required(self.body),
        ) {
            (Some(topic), Some(title), Some(body)) => Ok(TopicNotification {
                topic,
                title,
                body,
                sender_name: self.sender_name,
                sender_photo_url: self.sender_photo_url,
            }),
            _ => Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

impl TopicNotification {
    /// Build the FCM message for this notification
    pub fn to_message(&self) -> Message {
        let mut builder = NotificationBuilder::new(&self.topic, &self.title, &self.body);

        if let Some(name) = &self.sender_name {
            builder = builder.sender_name(name);
        }

        if let Some(url) = &self.sender_photo_url {
            builder = builder.sender_photo_url(url);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> NotificationRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_request() {
        let notification = request(json!({
            "topic": "news",
            "title": "Hi",
            "body": "Hello",
            "senderName": "Budi",
            "senderPhotoUrl": "https://example.com/budi.png"
        }))
        .validate()
        .unwrap();

        assert_eq!(notification.topic, "news");
        assert_eq!(notification.sender_name.as_deref(), Some("Budi"));
        assert_eq!(
            notification.sender_photo_url.as_deref(),
            Some("https://example.com/budi.png")
        );
    }

    #[test]
    fn test_missing_required_fields() {
        let cases = [
            json!({ "title": "Hi", "body": "Hello" }),
            json!({ "topic": "news", "body": "Hello" }),
            json!({ "topic": "news", "title": "Hi" }),
            json!({ "topic": "", "title": "Hi", "body": "Hello" }),
            json!({ "topic": "news", "title": null, "body": "Hello" }),
            json!({}),
        ];

        for case in cases {
            let err = request(case.clone()).validate().unwrap_err();
            assert!(
                matches!(&err, AppError::Validation(msg) if msg == REQUIRED_FIELDS_MESSAGE),
                "expected validation error for {}",
                case
            );
        }
    }

    #[test]
    fn test_whitespace_is_not_missing() {
        let notification = request(json!({ "topic": "news", "title": " ", "body": "Hello" }))
            .validate()
            .unwrap();
        assert_eq!(notification.title, " ");
    }

    #[test]
    fn test_to_message_applies_defaults() {
        let message = request(json!({
            "topic": "news",
            "title": "Hi",
            "body": "Hello",
            "senderName": ""
        }))
        .validate()
        .unwrap()
        .to_message();

        assert_eq!(message.data.sender_name, "Admin");
        assert_eq!(message.data.sender_photo_url, "");
        assert_eq!(message.topic, "news");
    }
}
