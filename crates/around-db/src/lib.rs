//! # around-db
//!
//! Database layer implementing the credential-store port with PostgreSQL
//! via SQLx. The `users.email` UNIQUE index is the authoritative guard
//! for identity-key exclusivity; this crate translates its violation into
//! `DomainError::EmailAlreadyExists`.

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::PgUserRepository;
