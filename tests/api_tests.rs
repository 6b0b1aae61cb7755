//! API integration tests, driving the router in-process

use std::sync::{Arc, Mutex};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use tower::ServiceExt;

use circulation_server::{
    api::create_router, config::AppConfig, services::clock::Clock, AppState,
};

/// Clock the test can move forward
struct TestClock(Mutex<NaiveDate>);

impl TestClock {
    fn advance(&self, days: i64) {
        let mut today = self.0.lock().unwrap();
        *today = *today + Duration::days(days);
    }
}

impl Clock for TestClock {
    fn today(&self) -> NaiveDate {
        *self.0.lock().unwrap()
    }
}

fn setup() -> (Router, Arc<TestClock>) {
    let clock = Arc::new(TestClock(Mutex::new(
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
    )));
    let state = AppState::new(AppConfig::default(), clock.clone());
    (create_router(state), clock)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(format!("/api/v1{}", uri))
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn seed_dune(app: &Router) {
    let (status, _) = send(
        app,
        "POST",
        "/books",
        Some(json!({ "id": "B1", "title": "Dune", "author": "Herbert" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(app, "POST", "/members", Some(json!({ "id": "M1", "name": "Alice" }))).await;
    assert_eq!(status, StatusCode::CREATED);
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("Expected an array")
        .iter()
        .map(|entry| entry["id"].as_str().expect("No id"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = setup();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 0);

    seed_dune(&app).await;
    let (_, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(body["books"], 1);
    assert_eq!(body["members"], 1);
}

#[tokio::test]
async fn test_add_book_echoes_entity() {
    let (app, _) = setup();

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "id": "B1", "title": "Dune", "author": "Herbert" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["book"]["is_issued"], false);
    assert_eq!(
        body["message"],
        "Book added: Book ID: B1, Title: Dune, Author: Herbert, Issued: false"
    );
}

#[tokio::test]
async fn test_issue_and_return_scenario() {
    let (app, _) = setup();
    seed_dune(&app).await;

    let loan = json!({ "book_id": "B1", "member_id": "M1" });

    let (status, body) = send(&app, "POST", "/loans", Some(loan.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["issue_date"], "2024-06-01");
    assert_eq!(body["due_date"], "2024-06-15");

    let (_, body) = send(&app, "GET", "/books/available", None).await;
    assert!(ids(&body).is_empty());

    let (status, body) = send(&app, "POST", "/loans", Some(loan.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "BookAlreadyIssued");

    let (status, body) = send(&app, "POST", "/loans/return", Some(loan)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "returned");
    assert_eq!(body["days_overdue"], 0);

    let (_, body) = send(&app, "GET", "/books/available", None).await;
    assert_eq!(ids(&body), vec!["B1"]);
}

#[tokio::test]
async fn test_late_return_reports_fee() {
    let (app, clock) = setup();
    seed_dune(&app).await;
    let loan = json!({ "book_id": "B1", "member_id": "M1" });

    send(&app, "POST", "/loans", Some(loan.clone())).await;
    clock.advance(20);

    let (status, body) = send(&app, "POST", "/loans/return", Some(loan)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["days_elapsed"], 20);
    assert_eq!(body["days_overdue"], 6);
    let fee: rust_decimal::Decimal = body["late_fee"]
        .as_str()
        .expect("Fee is serialized as a string")
        .parse()
        .unwrap();
    assert_eq!(fee, rust_decimal::Decimal::from(6));
    assert!(body["message"].as_str().unwrap().starts_with("Late return penalty: $6"));
}

#[tokio::test]
async fn test_return_not_issued_is_conflict() {
    let (app, _) = setup();
    seed_dune(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/loans/return",
        Some(json!({ "book_id": "B1", "member_id": "M1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "BookNotIssued");
}

#[tokio::test]
async fn test_unknown_entities_are_not_found() {
    let (app, _) = setup();
    seed_dune(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/loans",
        Some(json!({ "book_id": "B404", "member_id": "M1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchBook");

    let (status, body) = send(&app, "GET", "/members/M404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchMember");
}

#[tokio::test]
async fn test_duplicate_and_invalid_requests() {
    let (app, _) = setup();
    seed_dune(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/books",
        Some(json!({ "id": "B1", "title": "Emma", "author": "Austen" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (status, body) = send(&app, "POST", "/members", Some(json!({ "id": "", "name": "Bob" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, body) = send(&app, "GET", "/books/B1", None).await;
    assert_eq!(body["title"], "Dune");
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let (app, _) = setup();
    for (id, title) in [("B1", "Dune"), ("B2", "Emma"), ("B3", "DUNE")] {
        send(
            &app,
            "POST",
            "/books",
            Some(json!({ "id": id, "title": title, "author": "" })),
        )
        .await;
    }
    for (id, name) in [("M1", "alice"), ("M2", "Bob"), ("M3", "Alice")] {
        send(&app, "POST", "/members", Some(json!({ "id": id, "name": name }))).await;
    }

    let (status, body) = send(&app, "GET", "/books/search?title=dune", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["B1", "B3"]);

    let (_, body) = send(&app, "GET", "/members/search?name=ALICE", None).await;
    assert_eq!(ids(&body), vec!["M1", "M3"]);
}

#[tokio::test]
async fn test_member_loans_and_wrong_member_return() {
    let (app, clock) = setup();
    seed_dune(&app).await;
    send(&app, "POST", "/members", Some(json!({ "id": "M2", "name": "Bob" }))).await;
    send(&app, "POST", "/loans", Some(json!({ "book_id": "B1", "member_id": "M1" }))).await;

    let (status, body) = send(
        &app,
        "POST",
        "/loans/return",
        Some(json!({ "book_id": "B1", "member_id": "M2" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "BookNotHeldByMember");

    clock.advance(15);
    let (status, body) = send(&app, "GET", "/members/M1/loans", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["book"]["id"], "B1");
    assert_eq!(body[0]["is_overdue"], true);

    let (_, body) = send(&app, "GET", "/members/M1", None).await;
    assert_eq!(body["issued_books"]["B1"], "2024-06-01");
}
