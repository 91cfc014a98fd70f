//! Authentication service
//!
//! Orchestrates registration and login. Registration checks the email
//! first as a fast path, but the credential store's uniqueness constraint
//! is the authoritative guard: a racing duplicate that slips past the
//! pre-check fails at insert time with the same error. Login collapses
//! "unknown email" and "wrong password" into a single error so responses
//! cannot be used to probe which emails are registered.

use around_common::{hash_password, verify_password, AppError};
use around_core::{DomainError, User};
use tracing::{error, info, instrument, warn};

use crate::dto::{RegisteredResponse, SessionResponse, SigninRequest, SignupRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// Returns only the new account's id and email; no token is issued at
    /// signup and the hash is never echoed back.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: SignupRequest) -> ServiceResult<RegisteredResponse> {
        if request.email.trim().is_empty() || request.password.is_empty() {
            return Err(ServiceError::validation("Email and password are required"));
        }

        // Fast-path duplicate check; the insert below is the real guard
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password).map_err(ServiceError::from)?;

        let user = User::new(self.ctx.generate_id(), request.email);

        // A concurrent registration for the same email loses here with
        // the same EmailAlreadyExists the pre-check produces
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "Account registered");

        Ok(RegisteredResponse::from(&user))
    }

    /// Login with email and password, issuing a session token on success
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: SigninRequest) -> ServiceResult<SessionResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash on record");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // A malformed stored hash is an error, never a match
        let is_valid = verify_password(&request.password, &password_hash).map_err(|e| {
            error!(user_id = %user.id, error = %e, "Password verification failed");
            ServiceError::from(e)
        })?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let session = self
            .ctx
            .token_service()
            .issue(user.id)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "Session issued");

        Ok(SessionResponse::new(&user, session))
    }
}
