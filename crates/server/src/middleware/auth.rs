//! Authentication extractor.
//!
//! Provides an extractor for requiring a verified bearer token in route
//! handlers. Every protected endpoint re-verifies the token against the
//! identity provider; there is no session cache.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::{AuthGateway, UserIdentity};
use crate::error::{AppError, set_sentry_user};
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Rejects with 401 when the `Authorization` header is missing, not a
/// `Bearer` scheme, or when the identity provider does not recognize the
/// token. Provider outages also reject; the gateway fails closed.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(caller): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", caller.name)
/// }
/// ```
pub struct RequireAuth(pub UserIdentity);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        let gateway = AuthGateway::new(state.provider(), state.store());
        let caller = gateway
            .resolve_caller(token)
            .await
            .ok_or(AppError::Unauthorized)?;

        set_sentry_user(&caller.id, Some(caller.email.as_str()));

        Ok(Self(caller))
    }
}
