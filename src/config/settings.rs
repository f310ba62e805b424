use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Flat environment variables that map onto nested settings keys.
///
/// Nested keys can also be set with a double underscore separator,
/// e.g. `SERVER__HOST` or `FCM__BASE_URL`.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("SERVICE_ACCOUNT_KEY", "fcm.service_account_key"),
    ("OTEL_ENABLED", "otel.enabled"),
    ("OTEL_ENDPOINT", "otel.endpoint"),
    ("OTEL_SERVICE_NAME", "otel.service_name"),
    ("OTEL_SAMPLING_RATIO", "otel.sampling_ratio"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fcm: FcmConfig,
    #[serde(default)]
    pub otel: OtelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmConfig {
    /// Path to the service account JSON key, relative to the working directory
    pub service_account_key: Option<String>,
    /// FCM API origin (overridable for tests and emulators)
    #[serde(default = "default_fcm_base_url")]
    pub base_url: String,
    /// Per-request timeout for calls to FCM and the token endpoint
    #[serde(default = "default_fcm_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OtelConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_otel_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_otel_service_name")]
    pub service_name: String,
    #[serde(default = "default_sampling_ratio")]
    pub sampling_ratio: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_body_limit() -> usize {
    64 * 1024
}

fn default_fcm_base_url() -> String {
    "https://fcm.googleapis.com".to_string()
}

fn default_fcm_timeout() -> u64 {
    30
}

fn default_otel_endpoint() -> String {
    "http://localhost:4317".to_string()
}

fn default_otel_service_name() -> String {
    "topic-push-relay".to_string()
}

fn default_sampling_ratio() -> f64 {
    1.0
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        Self::load(None)
    }

    /// Build settings from config files plus either the process environment
    /// or, when given, an explicit variable map.
    pub fn load(vars: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        let lookup = |name: &str| match &vars {
            Some(map) => map.get(name).cloned(),
            None => env::var(name).ok(),
        };

        let run_mode = lookup("RUN_MODE").unwrap_or_else(|| "development".into());

        let mut builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port() as i64)?
            .set_default("server.body_limit", default_body_limit() as i64)?
            .set_default("fcm.base_url", default_fcm_base_url())?
            .set_default("fcm.timeout_seconds", default_fcm_timeout() as i64)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true)
                    .source(vars.clone()),
            );

        for (var, key) in ENV_OVERRIDES {
            builder = builder.set_override_option(*key, lookup(var))?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl FcmConfig {
    /// Resolve the configured key path against `base`, leaving absolute paths untouched.
    pub fn resolve_key_path(&self, base: &Path) -> Option<PathBuf> {
        self.service_account_key
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| base.join(p))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit: default_body_limit(),
        }
    }
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            service_account_key: None,
            base_url: default_fcm_base_url(),
            timeout_seconds: default_fcm_timeout(),
        }
    }
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: default_otel_endpoint(),
            service_name: default_otel_service_name(),
            sampling_ratio: default_sampling_ratio(),
        }
    }
}
