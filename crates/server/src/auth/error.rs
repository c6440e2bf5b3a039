//! Authentication error types.

use thiserror::Error;

use crate::auth::provider::ProviderError;
use crate::store::StoreError;

/// Errors that can occur during signup and caller resolution.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] ecofinds_core::EmailError),

    /// Signup without a display name.
    #[error("name is required")]
    MissingName,

    /// The provider rejected the signup; message comes from the provider.
    #[error("{0}")]
    Rejected(String),

    /// The provider was unreachable or answered garbage.
    #[error("identity provider error: {0}")]
    Provider(ProviderError),

    /// Store write for the profile record failed.
    #[error("database error: {0}")]
    Store(#[from] StoreError),
}
