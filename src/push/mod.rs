//! Push delivery to Firebase Cloud Messaging.
//!
//! - `message`: the FCM v1 message envelope
//! - `sender`: the `MessageSender` trait handlers depend on
//! - `credentials`: service account key loading
//! - `token`: OAuth2 access tokens minted from the service account
//! - `fcm`: the HTTP v1 client implementing `MessageSender`

mod credentials;
mod fcm;
mod message;
mod sender;
mod token;

use std::path::Path;
use std::sync::Arc;

use crate::config::FcmConfig;

pub use credentials::{CredentialsError, ServiceAccountKey};
pub use fcm::FcmClient;
pub use message::{
    AndroidConfig, AndroidPriority, ApnsConfig, Message, MessageData, Notification,
    APNS_PRIORITY_IMMEDIATE, MESSAGE_TYPE_TOPIC,
};
pub use sender::{DeliveryError, MessageSender};
pub use token::{TokenSource, FCM_SCOPE};

/// Load the service account key and build the FCM sender.
///
/// Runs once at startup, before the listener binds. Relative key paths are
/// resolved against `base_dir`.
pub fn init_sender(
    config: &FcmConfig,
    base_dir: &Path,
) -> Result<Arc<dyn MessageSender>, CredentialsError> {
    let path = config
        .resolve_key_path(base_dir)
        .ok_or(CredentialsError::NotConfigured)?;

    let key = ServiceAccountKey::from_file(&path)?;
    let client = FcmClient::new(&key, config)?;

    tracing::info!(
        project_id = %key.project_id,
        client_email = %key.client_email,
        endpoint = %client.endpoint(),
        "FCM sender initialized"
    );

    Ok(Arc::new(client))
}
