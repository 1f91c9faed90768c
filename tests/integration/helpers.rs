//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use eventhub_core::config::{AppConfig, AuthConfig, DatabaseConfig, Environment, StoreProvider};
use eventhub_database::Stores;

/// Password that satisfies the strength policy.
pub const PASSWORD: &str = "Abcdef1!";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct inspection
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores
    pub fn new() -> Self {
        let config = AppConfig {
            environment: Environment::Test,
            database: DatabaseConfig {
                provider: StoreProvider::Memory,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig {
                jwt_secret: Some("integration-test-secret".to_string()),
                password_salt: Some("integration-test-salt".to_string()),
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let stores = Stores::memory();
        let state = eventhub_api::build_state(config.clone(), stores.clone())
            .expect("Failed to build application state");
        let router = eventhub_api::build_app(state);

        Self {
            router,
            stores,
            config,
        }
    }

    /// Sign up an account in `namespace` ("admin" or "user") and return its token
    pub async fn signup(&self, namespace: &str, email: &str, name: &str) -> String {
        let response = self
            .request(
                "POST",
                &format!("/{namespace}/signup"),
                Some(json!({
                    "email": email,
                    "password": PASSWORD,
                    "confirmPassword": PASSWORD,
                    "name": name,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Signup failed: {:?}",
            response.body
        );

        response.body["token"]
            .as_str()
            .expect("No token in signup response")
            .to_string()
    }

    /// Log in to `namespace` and return the raw response
    pub async fn login(&self, namespace: &str, email: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            &format!("/{namespace}/login"),
            Some(json!({ "email": email, "password": password })),
            None,
        )
        .await
    }

    /// Create an upcoming event as the admin holding `token` and return its id
    pub async fn create_event(&self, token: &str, title: &str) -> String {
        let response = self
            .request("POST", "/events/create", Some(event_body(title)), Some(token))
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Event creation failed: {:?}",
            response.body
        );

        response.body["event"]["id"]
            .as_str()
            .expect("No event id in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// A valid free event starting a month from now
pub fn event_body(title: &str) -> Value {
    let start = chrono::Utc::now().naive_utc() + chrono::Duration::days(30);
    let end = start + chrono::Duration::hours(2);
    json!({
        "eventTitle": title,
        "eventVenue": "Main hall",
        "startDate": start.format("%Y-%m-%d").to_string(),
        "startTime": start.format("%H:%M").to_string(),
        "endDate": end.format("%Y-%m-%d").to_string(),
        "endTime": end.format("%H:%M").to_string(),
        "eventDescription": "An evening of talks",
        "eventImage": "data:image/png;base64,iVBORw0KGgo=",
        "type": "FREE",
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
