//! Test helpers for integration tests
//!
//! Spawns the real HTTP stack (router, middleware, extractors) over an
//! in-memory credential store, so the end-to-end tests need neither
//! PostgreSQL nor any environment variables.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use around_api::{create_app, state::AppState};
use around_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, ServerConfig, SessionConfig,
    TokenService,
};
use around_core::{DomainError, RepoResult, User, UserId, UserRepository};
use around_service::ServiceContextBuilder;

/// Signing secret shared by all test servers
pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory credential store
///
/// One mutex guards the whole map, so `create` performs its duplicate
/// check and insert atomically, matching the unique-index guarantee of
/// the real store.
#[derive(Default)]
pub struct MemoryUserRepository {
    inner: Mutex<HashMap<UserId, (User, String)>>,
}

impl MemoryUserRepository {
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<UserId, (User, String)>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Remove an account, simulating deletion after a token was issued
    pub fn remove(&self, id: UserId) {
        self.lock().remove(&id);
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

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub repo: Arc<MemoryUserRepository>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with a week-long session TTL
    pub async fn start() -> Result<Self> {
        Self::start_with_ttl(604_800).await
    }

    /// Start a test server issuing tokens with the given TTL in seconds
    ///
    /// A negative TTL issues tokens that are already expired.
    pub async fn start_with_ttl(session_ttl: i64) -> Result<Self> {
        let repo = Arc::new(MemoryUserRepository::default());
        let token_service = Arc::new(TokenService::new(TEST_SECRET, session_ttl));

        let service_context = ServiceContextBuilder::new()
            .user_repo(repo.clone())
            .token_service(token_service)
            .build()
            .map_err(|e| anyhow::anyhow!("context error: {e}"))?;

        let state = AppState::new(service_context, test_config(session_ttl));
        let app = create_app(state);

        // Ephemeral port; the OS picks a free one
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            repo,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }
}

/// Configuration for test servers; never read from the environment
fn test_config(session_ttl: i64) -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "around-backend-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        session: SessionConfig {
            secret: TEST_SECRET.to_string(),
            ttl_seconds: session_ttl,
        },
        cors: CorsConfig::default(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
