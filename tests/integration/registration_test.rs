//! Integration tests for event registration and participant views.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::new();
    let admin = app.signup("admin", "org@example.com", "Org").await;
    let user = app.signup("user", "alice@example.com", "Alice").await;
    let event_id = app.create_event(&admin, "Rust night").await;

    let response = app
        .request(
            "POST",
            &format!("/events/{event_id}/register"),
            Some(json!({ "phone_number": "555-0100" })),
            Some(&user),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Successfully registered for event");
    assert_eq!(response.body["event_title"], "Rust night");
    assert_eq!(response.body["payment_required"], false);
    assert!(response.body["registration_id"].as_str().is_some());
}

#[tokio::test]
async fn test_register_twice_conflicts() {
    let app = TestApp::new();
    let admin = app.signup("admin", "org@example.com", "Org").await;
    let user = app.signup("user", "alice@example.com", "Alice").await;
    let event_id = app.create_event(&admin, "Rust night").await;
    let path = format!("/events/{event_id}/register");

    let first = app.request("POST", &path, Some(json!({})), Some(&user)).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", &path, Some(json!({})), Some(&user)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["message"], "Already registered for this event");
}

#[tokio::test]
async fn test_admin_cannot_register() {
    let app = TestApp::new();
    let admin = app.signup("admin", "org@example.com", "Org").await;
    let event_id = app.create_event(&admin, "Rust night").await;

    let response = app
        .request(
            "POST",
            &format!("/events/{event_id}/register"),
            Some(json!({})),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Only users can access this endpoint");
}

#[tokio::test]
async fn test_register_unknown_event() {
    let app = TestApp::new();
    let user = app.signup("user", "alice@example.com", "Alice").await;

    for path in [
        "/events/not-an-id/register".to_string(),
        format!("/events/{}/register", uuid::Uuid::new_v4()),
    ] {
        let response = app.request("POST", &path, Some(json!({})), Some(&user)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["message"], "Event not found");
    }
}

#[tokio::test]
async fn test_participants_scoped_to_event() {
    let app = TestApp::new();
    let admin = app.signup("admin", "org@example.com", "Org").await;
    let alice = app.signup("user", "alice@example.com", "Alice").await;
    let bob = app.signup("user", "bob@example.com", "Bob").await;
    let talk = app.create_event(&admin, "Talk").await;
    let party = app.create_event(&admin, "Party").await;

    for (token, event_id) in [(&alice, &talk), (&bob, &talk), (&bob, &party)] {
        let response = app
            .request(
                "POST",
                &format!("/events/{event_id}/register"),
                Some(json!({ "payment_method": "card" })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request(
            "GET",
            &format!("/events/{talk}/participants"),
            None,
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_count"], 2);
    let names: Vec<_> = response.body["participants"]
        .as_array()
        .expect("participants")
        .iter()
        .filter_map(|p| p["user_name"].as_str())
        .collect();
    assert_eq!(names, ["Bob", "Alice"]);
    assert_eq!(response.body["participants"][0]["payment_method"], "card");
    assert_eq!(response.body["participants"][0]["payment_status"], "pending");

    let forbidden = app
        .request(
            "GET",
            &format!("/events/{talk}/participants"),
            None,
            Some(&alice),
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_registered_events_for_user() {
    let app = TestApp::new();
    let admin = app.signup("admin", "org@example.com", "Org").await;
    let user = app.signup("user", "alice@example.com", "Alice").await;
    let first = app.create_event(&admin, "First").await;
    let second = app.create_event(&admin, "Second").await;

    for event_id in [&first, &second] {
        app.request(
            "POST",
            &format!("/events/{event_id}/register"),
            Some(json!({})),
            Some(&user),
        )
        .await;
    }

    let response = app
        .request("GET", "/user/registered-events", None, Some(&user))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_count"], 2);
    assert_eq!(response.body["events"][0]["title"], "Second");
    assert_eq!(response.body["events"][1]["venue"], "Main hall");
    assert_eq!(response.body["events"][1]["payment_status"], "pending");
}
