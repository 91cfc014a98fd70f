//! Business logic services
//!
//! Service layer implementations handling validation and orchestration of
//! domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
