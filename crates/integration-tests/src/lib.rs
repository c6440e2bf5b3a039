//! Integration test harness for the EcoFinds marketplace API.
//!
//! Builds the full router against an in-memory key-value store and a static
//! identity provider, so tests exercise the complete HTTP surface (routing,
//! extractors, error mapping, JSON shapes) without a database or network.
//!
//! # Example
//!
//! ```rust,ignore
//! let ctx = TestContext::new();
//! let (status, body) = ctx.get("/api/v1/leaderboard", None).await;
//! assert_eq!(status, StatusCode::OK);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used)] // test harness; failures should panic loudly

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use parking_lot::Mutex;
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use ecofinds_core::{Email, UserId};
use ecofinds_server::auth::{IdentityProvider, ProviderError, UserIdentity};
use ecofinds_server::config::{AuthProviderConfig, ServerConfig};
use ecofinds_server::models::UserProfile;
use ecofinds_server::state::AppState;
use ecofinds_server::store::{self, KvStore, MemoryKvStore};

/// Identity provider backed by in-memory token and email tables.
///
/// Mirrors the hosted provider's observable behavior: unknown tokens verify
/// to nothing, duplicate emails are rejected with the provider's message.
#[derive(Default)]
pub struct StaticIdentityProvider {
    tokens: Mutex<HashMap<String, UserIdentity>>,
    emails: Mutex<HashSet<String>>,
}

impl StaticIdentityProvider {
    /// Register an identity and return a bearer token that resolves to it.
    pub fn issue_token(&self, identity: &UserIdentity) -> String {
        let token = format!("token-{}", Uuid::new_v4());
        self.tokens.lock().insert(token.clone(), identity.clone());
        self.emails.lock().insert(identity.email.as_str().to_owned());
        token
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn verify_token(&self, token: &str) -> Result<Option<UserIdentity>, ProviderError> {
        Ok(self.tokens.lock().get(token).cloned())
    }

    async fn create_user(
        &self,
        email: &Email,
        _password: &str,
        name: &str,
    ) -> Result<UserIdentity, ProviderError> {
        let mut emails = self.emails.lock();
        if !emails.insert(email.as_str().to_owned()) {
            return Err(ProviderError::Rejected(
                "A user with this email address has already been registered".to_string(),
            ));
        }

        Ok(UserIdentity {
            id: UserId::generate(),
            email: email.clone(),
            name: name.to_owned(),
        })
    }
}

/// A built application plus handles to its in-memory backends.
pub struct TestContext {
    app: Router,
    store: Arc<MemoryKvStore>,
    provider: Arc<StaticIdentityProvider>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Build the application with in-memory backends.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(MemoryKvStore::new());
        let provider = Arc::new(StaticIdentityProvider::default());

        let state = AppState::new(test_config(), store.clone(), provider.clone());
        let app = ecofinds_server::app(state);

        Self {
            app,
            store,
            provider,
        }
    }

    /// Direct handle on the backing store, for seeding and assertions.
    #[must_use]
    pub fn store(&self) -> &MemoryKvStore {
        &self.store
    }

    /// Register an identity with the provider and write its profile record.
    ///
    /// Returns the identity and a valid bearer token.
    pub async fn signed_up_user(&self, name: &str) -> (UserIdentity, String) {
        let (identity, token) = self.known_identity(name);

        let profile = UserProfile::new(identity.id, identity.email.clone(), name.to_owned());
        self.store
            .set(
                &UserProfile::storage_key(identity.id),
                store::encode(&profile).unwrap(),
            )
            .await
            .unwrap();

        (identity, token)
    }

    /// Register an identity with the provider but write no profile record.
    ///
    /// Models a half-completed signup: the token verifies but `user:{id}` is
    /// missing.
    #[must_use]
    pub fn known_identity(&self, name: &str) -> (UserIdentity, String) {
        let identity = UserIdentity {
            id: UserId::generate(),
            email: Email::parse(&format!("{}@example.com", name.to_lowercase())).unwrap(),
            name: name.to_owned(),
        };
        let token = self.provider.issue_token(&identity);
        (identity, token)
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, path, token, None).await
    }

    /// Send a POST request with an optional JSON body.
    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.request(Method::POST, path, token, body).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, path, token, None).await
    }

    /// Send a request through the router and decode the JSON response.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }
}

/// Configuration stub; nothing in it is dereferenced by in-memory tests.
fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: SecretString::from("postgres://unused/test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        auth: AuthProviderConfig {
            base_url: "https://auth.example.test".to_string(),
            service_key: SecretString::from("kJ8#mP2$vX9@qR4&nT7*wZ1^bC5%"),
        },
        sentry_dsn: None,
    }
}
