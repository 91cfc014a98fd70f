//! # around-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    HealthResponse, RegisteredResponse, SessionResponse, SigninRequest, SignupRequest,
    UpdateAvatarRequest, UpdateProfileRequest, UserResponse,
};
pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
