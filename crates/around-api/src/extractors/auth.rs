//! Authentication extractor
//!
//! Extracts and verifies session tokens from the Authorization header.
//! This runs before any protected handler, so handlers only ever see a
//! verified account identifier. The two failure modes stay distinct in
//! the logs but both reach the client as a generic 401.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use around_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from a verified session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Account identifier from the token subject
    pub user_id: UserId,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Verify the token; expired and malformed differ only in the log
        let user_id = app_state
            .token_service()
            .verify_subject(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Session token rejected");
                ApiError::InvalidAuthFormat
            })?;

        Ok(AuthUser::new(user_id))
    }
}
