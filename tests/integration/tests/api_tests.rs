//! API Integration Tests
//!
//! End-to-end tests over the real router and middleware, backed by an
//! in-memory credential store. No external services or environment
//! variables are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Signup Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/signup", &request).await.unwrap();
    let registered: RegisteredResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(registered.email, request.email);
    assert!(!registered.id.is_empty());
}

#[tokio::test]
async fn test_signup_response_has_no_token_or_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/signup", &request).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert!(body.get("token").is_none());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    // First registration
    server.post("/signup", &request).await.unwrap();

    // Second registration with same email, different password
    let mut duplicate = request.clone();
    duplicate.password = "AnotherPass456!".to_string();
    let response = server.post("/signup", &duplicate).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();

    assert_eq!(body.error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_signup_concurrent_duplicate_one_winner() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let (a, b) = tokio::join!(
        server.post("/signup", &request),
        server.post("/signup", &request),
    );
    let statuses = [a.unwrap().status(), b.unwrap().status()];

    assert!(statuses.contains(&StatusCode::CREATED), "one must succeed");
    assert!(statuses.contains(&StatusCode::CONFLICT), "one must lose");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/signup",
            &json!({ "email": "not-an-email", "password": "TestPass123!" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_signup_short_password() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/signup",
            &json!({ "email": "short@example.com", "password": "short" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Signin Tests
// ============================================================================

#[tokio::test]
async fn test_signin() {
    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/signup", &signup).await.unwrap();
    let registered: RegisteredResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/signin", &SigninRequest::from_signup(&signup))
        .await
        .unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(session.id, registered.id);
    assert_eq!(session.email, signup.email);
    assert!(!session.token.is_empty());
    assert!(session.expires_in > 0);
}

#[tokio::test]
async fn test_signin_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    server.post("/signup", &signup).await.unwrap();

    let response = server
        .post(
            "/signin",
            &json!({ "email": signup.email, "password": "WrongPass123!" }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_signin_unknown_email_matches_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    server.post("/signup", &signup).await.unwrap();

    let wrong_password = server
        .post(
            "/signin",
            &json!({ "email": signup.email, "password": "WrongPass123!" }),
        )
        .await
        .unwrap();
    let unknown_email = server
        .post(
            "/signin",
            &json!({ "email": "nobody@example.com", "password": signup.password }),
        )
        .await
        .unwrap();

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Identical bodies: the response never reveals whether the email exists
    let a: serde_json::Value = wrong_password.json().await.unwrap();
    let b: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Current User Tests
// ============================================================================

async fn signup_and_signin(server: &TestServer) -> (RegisteredResponse, SessionResponse) {
    let signup = SignupRequest::unique();
    let response = server.post("/signup", &signup).await.unwrap();
    let registered: RegisteredResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/signin", &SigninRequest::from_signup(&signup))
        .await
        .unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (registered, session)
}

#[tokio::test]
async fn test_get_current_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (registered, session) = signup_and_signin(&server).await;

    let response = server.get_auth("/users/me", &session.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.id, registered.id);
    assert_eq!(user.email, registered.email);
    // Fresh accounts carry the default profile
    assert_eq!(user.name, "Jacques Cousteau");
    assert_eq!(user.about, "Explorer");
    assert!(!user.avatar.is_empty());
}

#[tokio::test]
async fn test_get_current_user_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/users/me").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_get_current_user_tampered_token() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = signup_and_signin(&server).await;

    // Flip a character in the signature
    let mut tampered = session.token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'a' { 'b' } else { 'a' });

    let response = server.get_auth("/users/me", &tampered).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_get_current_user_expired_token() {
    // Negative TTL issues tokens that are already expired
    let server = TestServer::start_with_ttl(-60)
        .await
        .expect("Failed to start server");
    let (_, session) = signup_and_signin(&server).await;

    let response = server.get_auth("/users/me", &session.token).await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    // Expired tokens get the same generic rejection as tampered ones
    assert_eq!(body.error.code, "INVALID_TOKEN");
}

#[tokio::test]
async fn test_get_current_user_after_account_removed() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (registered, session) = signup_and_signin(&server).await;

    // Token stays valid but the account is gone
    server.repo.remove(registered.id.parse().unwrap());

    let response = server.get_auth("/users/me", &session.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Profile Update Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = signup_and_signin(&server).await;

    let response = server
        .patch_auth(
            "/users/me",
            &session.token,
            &json!({ "name": "Marie Curie", "about": "Physicist" }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(user.name, "Marie Curie");
    assert_eq!(user.about, "Physicist");

    // Persisted, not just echoed
    let response = server.get_auth("/users/me", &session.token).await.unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.name, "Marie Curie");
}

#[tokio::test]
async fn test_update_profile_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = signup_and_signin(&server).await;

    // Single-character name is below the minimum length
    let response = server
        .patch_auth(
            "/users/me",
            &session.token,
            &json!({ "name": "X", "about": "Physicist" }),
        )
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_avatar() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = signup_and_signin(&server).await;

    let response = server
        .patch_auth(
            "/users/me/avatar",
            &session.token,
            &json!({ "avatar": "https://example.com/me.png" }),
        )
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.avatar, "https://example.com/me.png");
}

#[tokio::test]
async fn test_update_avatar_rejects_non_url() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, session) = signup_and_signin(&server).await;

    let response = server
        .patch_auth(
            "/users/me/avatar",
            &session.token,
            &json!({ "avatar": "not a url" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_update_profile_without_token() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .patch_auth(
            "/users/me",
            "",
            &json!({ "name": "Marie Curie", "about": "Physicist" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
