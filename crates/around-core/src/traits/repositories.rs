//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the credential store; the
//! infrastructure layer provides the implementation. The store is the
//! single source of truth for email uniqueness: `create` must reject a
//! duplicate email with `DomainError::EmailAlreadyExists` even when a
//! racing registration slipped past the caller's pre-check.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find account by internal identifier
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find account by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if an email is already taken (fast-path pre-check only)
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Persist a new account with its password hash
    ///
    /// Must enforce email uniqueness atomically and fail with
    /// `DomainError::EmailAlreadyExists` on a duplicate.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get the stored password hash for credential verification
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;

    /// Update name and about, returning the stored account
    async fn update_profile(&self, id: UserId, name: &str, about: &str) -> RepoResult<User>;

    /// Update the avatar URL, returning the stored account
    async fn update_avatar(&self, id: UserId, avatar: &str) -> RepoResult<User>;
}
