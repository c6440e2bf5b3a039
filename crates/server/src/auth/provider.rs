//! Identity provider client.
//!
//! Account credentials live in a hosted identity provider (a GoTrue-style
//! auth service); this module consumes exactly two capabilities from it:
//! verify a bearer token into an identity, and create a confirmed account.
//! Everything else (password reset, email verification loops, sessions) is
//! the provider's business.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use ecofinds_core::{Email, UserId};

use crate::config::AuthProviderConfig;

/// Errors from the identity provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider rejected the request (invalid signup data, duplicate
    /// email). Carries the provider's own message for the client.
    #[error("{0}")]
    Rejected(String),

    /// Transport-level failure talking to the provider.
    #[error("identity provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with something we could not interpret.
    #[error("unexpected identity provider response: {0}")]
    InvalidResponse(String),
}

/// A verified identity resolved from the provider.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub id: UserId,
    pub email: Email,
    pub name: String,
}

/// Token verification and account creation, delegated to the hosted provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a bearer token.
    ///
    /// Returns `Ok(None)` when the token is invalid or expired. Transport
    /// failures are errors; the auth gateway decides how to treat them.
    async fn verify_token(&self, token: &str) -> Result<Option<UserIdentity>, ProviderError>;

    /// Create a new account with auto-confirmation (no email loop).
    async fn create_user(
        &self,
        email: &Email,
        password: &str,
        name: &str,
    ) -> Result<UserIdentity, ProviderError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ProviderUser {
    id: Uuid,
    email: String,
    #[serde(default)]
    user_metadata: ProviderUserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderUserMetadata {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    #[serde(alias = "message", alias = "error_description")]
    msg: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateUserRequest<'a> {
    email: &'a str,
    password: &'a str,
    user_metadata: CreateUserMetadata<'a>,
    /// Confirm the email immediately; no mail server is configured.
    email_confirm: bool,
}

#[derive(Debug, Serialize)]
struct CreateUserMetadata<'a> {
    name: &'a str,
}

impl ProviderUser {
    fn into_identity(self) -> Result<UserIdentity, ProviderError> {
        let email = Email::parse(&self.email)
            .map_err(|e| ProviderError::InvalidResponse(format!("invalid email: {e}")))?;

        Ok(UserIdentity {
            id: UserId::new(self.id),
            email,
            name: self.user_metadata.name.unwrap_or_default(),
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTTP implementation
// ─────────────────────────────────────────────────────────────────────────────

/// HTTP client for the hosted identity provider.
pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    service_key: SecretString,
}

impl HttpIdentityProvider {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: &AuthProviderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            service_key: config.service_key.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn rejection(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let msg = response
            .json::<ProviderErrorBody>()
            .await
            .ok()
            .and_then(|body| body.msg)
            .unwrap_or_else(|| format!("provider returned status {status}"));
        ProviderError::Rejected(msg)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn verify_token(&self, token: &str) -> Result<Option<UserIdentity>, ProviderError> {
        let response = self
            .client
            .get(self.endpoint("/auth/v1/user"))
            .bearer_auth(token)
            .header("apikey", self.service_key.expose_secret())
            .send()
            .await?;

        if !response.status().is_success() {
            // Invalid, expired or malformed token: unauthenticated, not an error.
            return Ok(None);
        }

        let user: ProviderUser = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        user.into_identity().map(Some)
    }

    async fn create_user(
        &self,
        email: &Email,
        password: &str,
        name: &str,
    ) -> Result<UserIdentity, ProviderError> {
        let response = self
            .client
            .post(self.endpoint("/auth/v1/admin/users"))
            .bearer_auth(self.service_key.expose_secret())
            .header("apikey", self.service_key.expose_secret())
            .json(&CreateUserRequest {
                email: email.as_str(),
                password,
                user_metadata: CreateUserMetadata { name },
                email_confirm: true,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() {
            return Err(Self::rejection(response).await);
        }
        if !status.is_success() {
            return Err(ProviderError::InvalidResponse(format!(
                "provider returned status {status}"
            )));
        }

        let user: ProviderUser = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        user.into_identity()
    }
}
