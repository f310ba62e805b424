mod settings;

pub use settings::{FcmConfig, OtelConfig, ServerConfig, Settings};
