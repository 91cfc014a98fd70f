//! In-memory test doubles for service-level tests
//!
//! `MemoryUserRepository` backs the services without PostgreSQL. The
//! whole store sits behind one mutex, so `create` checks and inserts
//! under a single lock and duplicate emails lose the race exactly like
//! they do against the real unique index.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use around_common::TokenService;
use around_core::{DomainError, RepoResult, User, UserId, UserRepository};

use super::context::ServiceContext;

#[derive(Default)]
pub(crate) struct MemoryUserRepository {
    inner: Mutex<HashMap<UserId, (User, String)>>,
}

impl MemoryUserRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<UserId, (User, String)>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub(crate) fn overwrite_hash(&self, id: UserId, hash: &str) {
        if let Some((_, stored)) = self.lock().get_mut(&id) {
            *stored = hash.to_string();
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.lock().get(&id).map(|(user, _)| user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .lock()
            .values()
            .find(|(user, _)| user.email == email)
            .map(|(user, _)| user.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.lock().values().any(|(user, _)| user.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut store = self.lock();
        // Check and insert under the same lock, like the unique index does
        if store.values().any(|(existing, _)| existing.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        store.insert(user.id, (user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self.lock().get(&id).map(|(_, hash)| hash.clone()))
    }

    async fn update_profile(&self, id: UserId, name: &str, about: &str) -> RepoResult<User> {
        let mut store = self.lock();
        let (user, _) = store.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.set_profile(name.to_string(), about.to_string());
        Ok(user.clone())
    }

    async fn update_avatar(&self, id: UserId, avatar: &str) -> RepoResult<User> {
        let mut store = self.lock();
        let (user, _) = store.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        user.set_avatar(avatar.to_string());
        Ok(user.clone())
    }
}

/// Context wired to a fresh in-memory store and a fixed test secret
pub(crate) fn test_context() -> ServiceContext {
    test_context_with_repo().0
}

/// Like `test_context`, but also hands back the store for direct tampering
pub(crate) fn test_context_with_repo() -> (ServiceContext, Arc<MemoryUserRepository>) {
    let repo = Arc::new(MemoryUserRepository::new());
    let ctx = ServiceContext::new(
        repo.clone(),
        Arc::new(TokenService::new("test-secret-for-services", 3600)),
    );
    (ctx, repo)
}
