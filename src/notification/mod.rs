//! Topic notification requests and message construction.

mod builder;
mod request;

pub use builder::{NotificationBuilder, DEFAULT_SENDER_NAME};
pub use request::{NotificationRequest, TopicNotification, REQUIRED_FIELDS_MESSAGE};
