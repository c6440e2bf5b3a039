//! Auth gateway.
//!
//! Sits between the HTTP layer and the hosted identity provider. Two jobs:
//! resolve a bearer token to a caller identity (failing closed on any
//! provider trouble), and create accounts, writing the marketplace profile
//! record alongside the provider account.

mod error;
pub mod provider;

pub use error::AuthError;
pub use provider::{HttpIdentityProvider, IdentityProvider, ProviderError, UserIdentity};

use ecofinds_core::Email;

use crate::models::UserProfile;
use crate::store::{self, KvStore};

/// Auth gateway over the identity provider and the profile store.
pub struct AuthGateway<'a> {
    provider: &'a dyn IdentityProvider,
    store: &'a dyn KvStore,
}

impl<'a> AuthGateway<'a> {
    /// Create a new auth gateway.
    #[must_use]
    pub const fn new(provider: &'a dyn IdentityProvider, store: &'a dyn KvStore) -> Self {
        Self { provider, store }
    }

    /// Resolve a bearer token to a caller identity.
    ///
    /// Fails closed: an invalid token, an unreachable provider or a garbled
    /// response all resolve to `None`. Verification problems are logged, not
    /// propagated.
    pub async fn resolve_caller(&self, token: &str) -> Option<UserIdentity> {
        match self.provider.verify_token(token).await {
            Ok(identity) => identity,
            Err(e) => {
                tracing::debug!(error = %e, "token verification failed");
                None
            }
        }
    }

    /// Create an account and its marketplace profile.
    ///
    /// The account is created at the provider with auto-confirmation, then a
    /// `user:{id}` profile record is written with zero eco points and no
    /// badges.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` or `AuthError::MissingName` for bad
    /// input, `AuthError::Rejected` with the provider's message when the
    /// provider refuses the signup, and `AuthError::Provider`/
    /// `AuthError::Store` for infrastructure failures.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<UserProfile, AuthError> {
        let email = Email::parse(email)?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AuthError::MissingName);
        }

        let identity = self
            .provider
            .create_user(&email, password, name)
            .await
            .map_err(|e| match e {
                ProviderError::Rejected(msg) => AuthError::Rejected(msg),
                other => AuthError::Provider(other),
            })?;

        let profile = UserProfile::new(identity.id, email, name.to_owned());
        self.store
            .set(
                &UserProfile::storage_key(profile.id),
                store::encode(&profile)?,
            )
            .await?;

        Ok(profile)
    }
}
