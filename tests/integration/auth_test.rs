//! Integration tests for signup, login, lockout, and token handling.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{PASSWORD, TestApp};

#[tokio::test]
async fn test_user_signup_success() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/signup",
            Some(json!({
                "email": "A@B.com",
                "password": PASSWORD,
                "confirmPassword": PASSWORD,
                "name": "A",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["user"]["email"], "a@b.com");
    assert_eq!(response.body["user"]["role"], "user");
    assert_eq!(response.body["message"], "User registered successfully");
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = TestApp::new();
    app.signup("user", "a@b.com", "A").await;

    let response = app
        .request(
            "POST",
            "/user/signup",
            Some(json!({
                "email": "a@b.com",
                "password": PASSWORD,
                "confirmPassword": PASSWORD,
                "name": "A",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_same_email_allowed_across_namespaces() {
    let app = TestApp::new();
    app.signup("user", "shared@example.com", "Shared").await;
    app.signup("admin", "shared@example.com", "Shared").await;
}

#[tokio::test]
async fn test_signup_reports_every_violation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/user/signup",
            Some(json!({
                "email": "not-an-email",
                "password": "short",
                "confirmPassword": "different",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let details = response.body["details"].as_array().expect("details");
    let messages: Vec<_> = details
        .iter()
        .filter_map(|d| d["message"].as_str())
        .collect();
    assert!(messages.contains(&"Please provide a valid email address"));
    assert!(messages.contains(&"Passwords do not match"));
    assert!(messages.contains(&"Name is required"));
    assert!(messages.iter().any(|m| m.starts_with("Password must be")));
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/admin/login", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid JSON data");
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new();
    app.signup("admin", "org@example.com", "Org").await;

    let response = app.login("admin", "ORG@example.com", PASSWORD).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Login successful");
    assert_eq!(response.body["user"]["role"], "admin");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new();
    app.signup("user", "u@example.com", "U").await;

    let response = app.login("user", "u@example.com", "Wrong1!pass").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new();

    let response = app.login("user", "nobody@example.com", PASSWORD).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_lockout_after_five_failures() {
    let app = TestApp::new();
    app.signup("user", "victim@example.com", "Victim").await;

    for _ in 0..4 {
        let response = app.login("user", "victim@example.com", "Wrong1!pass").await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let fifth = app.login("user", "victim@example.com", "Wrong1!pass").await;
    assert_eq!(fifth.status, StatusCode::FORBIDDEN);

    let response = app.login("user", "victim@example.com", PASSWORD).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "ACCOUNT_LOCKED");
}

#[tokio::test]
async fn test_admin_has_no_lockout() {
    let app = TestApp::new();
    app.signup("admin", "org@example.com", "Org").await;

    for _ in 0..6 {
        let response = app.login("admin", "org@example.com", "Wrong1!pass").await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    let response = app.login("admin", "org@example.com", PASSWORD).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new();
    let token = app.signup("user", "me@example.com", "Me").await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["email"], "me@example.com");
    assert_eq!(response.body["user"]["name"], "Me");
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();

    let missing = app.request("GET", "/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["message"], "Authentication required");

    let garbage = app
        .request("GET", "/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
