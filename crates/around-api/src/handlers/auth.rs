//! Authentication handlers
//!
//! Endpoints for account registration and login.

use axum::{extract::State, Json};
use around_service::{
    AuthService, RegisteredResponse, SessionResponse, SigninRequest, SignupRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new account
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<RegisteredResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SigninRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
