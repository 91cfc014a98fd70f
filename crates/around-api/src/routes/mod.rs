//! Route definitions
//!
//! Signup, signin and health are open; everything under /users requires
//! a verified session token.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{auth, health, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .route("/health", get(health::health_check))
}

/// Authentication routes (no token required)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
}

/// Current-user profile routes (token required via the AuthUser extractor)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(users::get_current_user))
        .route("/users/me", patch(users::update_profile))
        .route("/users/me/avatar", patch(users::update_avatar))
}
