//! OAuth2 access tokens for FCM via the JWT bearer grant.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::{CredentialsError, DeliveryError, ServiceAccountKey};

/// OAuth scope required by `projects.messages.send`.
pub const FCM_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for the signed assertion (Google caps this at one hour).
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed this long before the provider says they expire.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
}

fn default_expires_in() -> i64 {
    ASSERTION_LIFETIME_SECS
}

#[derive(Debug, Deserialize)]
struct OAuthError {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(EXPIRY_MARGIN_SECS) < self.expires_at
    }
}

/// Mints and caches access tokens for a service account.
pub struct TokenSource {
    client_email: String,
    key_id: Option<String>,
    token_uri: String,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cached: RwLock<Option<AccessToken>>,
}

impl TokenSource {
    pub fn new(key: &ServiceAccountKey, http: reqwest::Client) -> Result<Self, CredentialsError> {
        Ok(Self {
            client_email: key.client_email.clone(),
            key_id: key.private_key_id.clone(),
            token_uri: key.token_uri.clone(),
            encoding_key: key.encoding_key()?,
            http,
            cached: RwLock::new(None),
        })
    }

    /// Return a valid access token, exchanging a new assertion when the cached one is stale.
    pub async fn access_token(&self) -> Result<String, DeliveryError> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
                return Ok(token.value.clone());
            }
        }

        let mut cached = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Utc::now())) {
            return Ok(token.value.clone());
        }

        let token = self.fetch().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    fn sign_assertion(&self, now: DateTime<Utc>) -> Result<String, DeliveryError> {
        let iat = now.timestamp();
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: FCM_SCOPE,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };

        let mut header = Header::new(Algorithm::RS256);
        header.kid = self.key_id.clone();

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| DeliveryError::Auth(format!("failed to sign token assertion: {}", e)))
    }

    async fn fetch(&self) -> Result<AccessToken, DeliveryError> {
        let now = Utc::now();
        let assertion = self.sign_assertion(now)?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<OAuthError>(&body) {
                Ok(OAuthError {
                    error,
                    error_description: Some(description),
                }) => format!("{}: {}", error, description),
                Ok(OAuthError { error, .. }) => error,
                Err(_) => format!("token endpoint returned {}", status),
            };
            tracing::warn!(status = %status, message = %message, "Access token request rejected");
            return Err(DeliveryError::Auth(message));
        }

        let token: TokenResponse = response.json().await?;
        tracing::debug!(expires_in = token.expires_in, "Obtained FCM access token");

        // Never trust the provider beyond the assertion lifetime
        let lifetime = token.expires_in.clamp(0, ASSERTION_LIFETIME_SECS);

        Ok(AccessToken {
            value: token.access_token,
            expires_at: now + Duration::seconds(lifetime),
        })
    }
}
