//! User profile service
//!
//! Profile reads and edits for the already-authenticated account. The
//! identifier always comes from a verified session, never from the
//! request body, so a caller can only ever touch their own profile.

use tracing::{info, instrument};

use crate::dto::{UpdateAvatarRequest, UpdateProfileRequest, UserResponse};
use around_core::UserId;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User profile service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch the profile behind a verified session
    ///
    /// An account deleted after its token was issued resolves to 404.
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Update the current user's name and about line
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: UserId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .update_profile(user_id, &request.name, &request.about)
            .await?;

        info!(user_id = %user.id, "Profile updated");

        Ok(UserResponse::from(&user))
    }

    /// Update the current user's avatar URL
    #[instrument(skip(self, request))]
    pub async fn update_avatar(
        &self,
        user_id: UserId,
        request: UpdateAvatarRequest,
    ) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .update_avatar(user_id, &request.avatar)
            .await?;

        info!(user_id = %user.id, "Avatar updated");

        Ok(UserResponse::from(&user))
    }
}
