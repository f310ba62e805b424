use std::sync::Arc;

use crate::config::Settings;
use crate::push::MessageSender;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// Delivery capability, initialized once at startup
    pub sender: Arc<dyn MessageSender>,
}

impl AppState {
    pub fn new(settings: Settings, sender: Arc<dyn MessageSender>) -> Self {
        Self {
            settings: Arc::new(settings),
            sender,
        }
    }
}
