//! Integration tests for event creation and listing.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, event_body};

#[tokio::test]
async fn test_create_event_success() {
    let app = TestApp::new();
    let token = app.signup("admin", "org@example.com", "Org").await;

    let mut body = event_body("Paid workshop");
    body["type"] = json!("paid");
    body["eventCost"] = json!("25.50");

    let response = app
        .request("POST", "/events/create", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Event created successfully");
    assert_eq!(response.body["event"]["title"], "Paid workshop");
    assert_eq!(response.body["event"]["type"], "PAID");
    assert_eq!(response.body["event"]["cost"], 25.5);
}

#[tokio::test]
async fn test_end_before_start_rejected() {
    let app = TestApp::new();
    let token = app.signup("admin", "org@example.com", "Org").await;

    let mut body = event_body("Backwards");
    body["startDate"] = json!("2030-06-02");
    body["endDate"] = json!("2030-06-01");

    let response = app
        .request("POST", "/events/create", Some(body), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "End date and time must be after start date and time"
    );
}

#[tokio::test]
async fn test_create_event_collects_all_violations() {
    let app = TestApp::new();
    let token = app.signup("admin", "org@example.com", "Org").await;

    let response = app
        .request(
            "POST",
            "/events/create",
            Some(json!({ "type": "PAID", "eventImage": "plain-text" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let details = response.body["details"].as_array().expect("details");
    let messages: Vec<_> = details
        .iter()
        .filter_map(|d| d["message"].as_str())
        .collect();
    assert!(messages.contains(&"Event title is required"));
    assert!(messages.contains(&"Invalid image format. Must be base64 encoded."));
    assert!(messages.contains(&"Event cost is required for paid events"));
}

#[tokio::test]
async fn test_user_cannot_create_event() {
    let app = TestApp::new();
    let token = app.signup("user", "u@example.com", "U").await;

    let response = app
        .request(
            "POST",
            "/events/create",
            Some(event_body("Sneaky")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "FORBIDDEN");
    assert_eq!(
        response.body["message"],
        "Unauthorized. Admin access required."
    );
}

#[tokio::test]
async fn test_list_events_paginates_newest_first() {
    let app = TestApp::new();
    let token = app.signup("admin", "org@example.com", "Org").await;
    for i in 0..3 {
        app.create_event(&token, &format!("Event {i}")).await;
    }

    let first = app.request("GET", "/events?page=1&limit=2", None, None).await;
    assert_eq!(first.status, StatusCode::OK);
    let titles: Vec<_> = first.body["events"]
        .as_array()
        .expect("events")
        .iter()
        .filter_map(|e| e["title"].as_str())
        .collect();
    assert_eq!(titles, ["Event 2", "Event 1"]);
    assert_eq!(first.body["pagination"]["total"], 3);
    assert_eq!(first.body["pagination"]["has_more"], true);
    assert_eq!(first.body["events"][0]["location"], "Main hall");

    let second = app.request("GET", "/events?page=2&limit=2", None, None).await;
    assert_eq!(second.body["events"].as_array().map(Vec::len), Some(1));
    assert_eq!(second.body["pagination"]["has_more"], false);
}

#[tokio::test]
async fn test_list_events_default_limit() {
    let app = TestApp::new();

    let response = app.request("GET", "/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["pagination"]["page"], 1);
    assert_eq!(response.body["pagination"]["limit"], 9);
    assert_eq!(response.body["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_ended_events_drop_out_of_listing() {
    let app = TestApp::new();
    let token = app.signup("admin", "org@example.com", "Org").await;

    let mut past = event_body("Last year");
    past["startDate"] = json!("2020-01-01");
    past["endDate"] = json!("2020-01-01");
    past["startTime"] = json!("10:00");
    past["endTime"] = json!("12:00");
    let response = app
        .request("POST", "/events/create", Some(past), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    app.create_event(&token, "Next month").await;

    let listing = app.request("GET", "/events", None, None).await;
    assert_eq!(listing.body["pagination"]["total"], 1);
    assert_eq!(listing.body["events"][0]["title"], "Next month");
}

#[tokio::test]
async fn test_admin_events_scoped_to_caller() {
    let app = TestApp::new();
    let first = app.signup("admin", "first@example.com", "First").await;
    let second = app.signup("admin", "second@example.com", "Second").await;
    app.create_event(&first, "Mine").await;
    app.create_event(&second, "Theirs").await;

    let response = app
        .request("GET", "/admin/events", None, Some(&first))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 1);
    assert_eq!(response.body["events"][0]["title"], "Mine");
}

#[tokio::test]
async fn test_ended_events_drop_out_of_admin_listing() {
    let app = TestApp::new();
    let token = app.signup("admin", "org@example.com", "Org").await;

    let mut past = event_body("Last year");
    past["startDate"] = json!("2020-01-01");
    past["endDate"] = json!("2020-01-01");
    past["startTime"] = json!("10:00");
    past["endTime"] = json!("12:00");
    let response = app
        .request("POST", "/events/create", Some(past), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    app.create_event(&token, "Next month").await;

    let response = app
        .request("GET", "/admin/events", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 1);
    assert_eq!(response.body["events"][0]["title"], "Next month");
}

#[tokio::test]
async fn test_huge_page_number_is_clamped() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/events?page=18446744073709551615", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["events"].as_array().map(Vec::len), Some(0));
    assert_eq!(response.body["pagination"]["has_more"], false);
}
