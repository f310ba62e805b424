//! Delivery capability abstraction.

use async_trait::async_trait;
use thiserror::Error;

use super::Message;

/// Errors returned by a push delivery backend.
///
/// The display text is what callers see, so every variant renders the
/// underlying message without a prefix.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The provider answered with an error (bad topic, quota, outage, ...)
    #[error("{0}")]
    Provider(String),

    /// An access token could not be obtained
    #[error("{0}")]
    Auth(String),

    /// The HTTP exchange itself failed (connect, timeout, decode)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Something that can deliver a fully built [`Message`] to a topic.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send the message once and return the provider's message identifier.
    async fn send(&self, message: &Message) -> Result<String, DeliveryError>;
}
