//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Account ids
//! serialize as UUID strings.

use around_core::{User, UserId};
use around_common::SessionToken;
use serde::Serialize;

/// Registration response: the public projection of a new account
///
/// Only the internal identifier and the email are echoed back; the hash
/// never appears in any response.
#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub id: UserId,
    pub email: String,
}

impl From<&User> for RegisteredResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Login response with the issued session token
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: UserId,
    pub email: String,
    pub token: String,
    pub expires_in: i64,
}

impl SessionResponse {
    pub fn new(user: &User, session: SessionToken) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            token: session.token,
            expires_in: session.expires_in,
        }
    }
}

/// Full profile of the current user
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub about: String,
    pub avatar: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            about: user.about.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
