//! Integration tests for registration, login, and bearer tokens.

use chrono::{Duration, Utc};
use http::StatusCode;

use cardhub_auth::jwt::{JwtDecoder, JwtEncoder};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new().await;

    let response = app.register("alice", "password123", "alice@example.com").await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body.get("msg").is_some());
    assert!(response.body.get("access_token").is_none());
}

#[tokio::test]
async fn test_register_duplicate_username_with_other_email() {
    let app = TestApp::new().await;
    app.register("alice", "password123", "alice@example.com").await;

    let response = app.register("alice", "different", "other@example.com").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::new().await;
    app.register("alice", "password123", "shared@example.com").await;

    let response = app.register("bob", "password123", "shared@example.com").await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_ne!(response.body["msg"], "Username already exists");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = TestApp::new().await;

    let missing_email = app
        .request(
            "POST",
            "/api/register",
            Some(serde_json::json!({ "username": "alice", "password": "pw" })),
            None,
        )
        .await;
    let empty_password = app.register("alice", "", "alice@example.com").await;

    assert_eq!(missing_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty_password.status, StatusCode::BAD_REQUEST);
    assert!(missing_email.body["msg"].is_string());
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;
    app.register("alice", "password123", "alice@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({
                "username": "alice",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["access_token"].is_string());
    assert_eq!(response.body["username"], "alice");
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let app = TestApp::new().await;
    app.register("alice", "password123", "alice@example.com").await;

    let wrong_password = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "username": "alice", "password": "wrong" })),
            None,
        )
        .await;
    let unknown_user = app
        .request(
            "POST",
            "/api/login",
            Some(serde_json::json!({ "username": "nobody", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_user.body);
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    let app = TestApp::new().await;

    let no_token = app.request("GET", "/api/cards", None, None).await;
    let bad_token = app
        .request("GET", "/api/cards", None, Some("not-a-token"))
        .await;

    assert_eq!(no_token.status, StatusCode::UNAUTHORIZED);
    assert_eq!(bad_token.status, StatusCode::UNAUTHORIZED);
    assert!(no_token.body["msg"].is_string());
}

#[tokio::test]
async fn test_token_expires_after_ttl() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let user_id = JwtDecoder::new(&app.config.auth)
        .decode(&token)
        .unwrap()
        .user_id()
        .unwrap();
    let encoder = JwtEncoder::new(&app.config.auth).unwrap();

    let almost_expired = encoder
        .generate_token_at(user_id, "alice", Utc::now() - Duration::days(7) + Duration::minutes(5))
        .unwrap();
    let expired = encoder
        .generate_token_at(user_id, "alice", Utc::now() - Duration::days(8))
        .unwrap();

    let ok = app
        .request("GET", "/api/cards", None, Some(&almost_expired.token))
        .await;
    let rejected = app
        .request("GET", "/api/cards", None, Some(&expired.token))
        .await;

    assert_eq!(ok.status, StatusCode::OK);
    assert_eq!(rejected.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_for_unregistered_user_rejected() {
    let app = TestApp::new().await;
    let stranger = cardhub_core::types::UserId::new();
    let issued = JwtEncoder::new(&app.config.auth)
        .unwrap()
        .generate_token(stranger, "ghost")
        .unwrap();

    let response = app
        .request("GET", "/api/cards", None, Some(&issued.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
