//! Request DTOs for API endpoints

use serde::Deserialize;
use validator::Validate;

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Profile update request (name and about)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 30, message = "Name must be 2-30 characters"))]
    pub name: String,

    #[validate(length(min = 2, max = 30, message = "About must be 2-30 characters"))]
    pub about: String,
}

/// Avatar update request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAvatarRequest {
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: String,
}
