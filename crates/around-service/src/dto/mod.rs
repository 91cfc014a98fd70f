//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry `validator` derives so malformed input fails with a
//! field-level validation error before reaching the services. Response
//! DTOs are minimal projections: the password hash has no representation
//! here at all.

pub mod requests;
pub mod responses;

pub use requests::{SigninRequest, SignupRequest, UpdateAvatarRequest, UpdateProfileRequest};
pub use responses::{HealthResponse, RegisteredResponse, SessionResponse, UserResponse};
