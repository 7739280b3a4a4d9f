//! End-to-end tests driving the router in-process, no socket needed.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use blush_api::{AppState, AppStateInner, routes};
use blush_db::Database;
use blush_db::models::CardRow;

fn test_state() -> AppState {
    Arc::new(AppStateInner {
        db: Database::open_in_memory().expect("in-memory db"),
    })
}

fn app(state: AppState) -> Router {
    routes::router(state)
}

async fn post_json(app: Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    split(response).await
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split(response).await
}

async fn split(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn create_returns_id_and_view_url() {
    let state = test_state();
    let (status, body) = post_json(
        app(state),
        "/api/create",
        json!({ "recipient_name": "Sam", "messages": [{ "text": "hi" }] }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["url"], format!("/v/{id}"));
}

#[tokio::test]
async fn create_then_fetch_round_trips_nested_fields() {
    let state = test_state();
    let messages = json!([
        { "text": "happy birthday", "fontSize": 24, "color": "#ff00aa" },
        { "text": "love you" },
    ]);
    let theme = json!({ "backgroundEffect": "hearts", "emojis": ["💖", "✨"] });

    let (status, created) = post_json(
        app(state.clone()),
        "/api/create",
        json!({
            "recipient_name": "Sam",
            "messages": messages,
            "theme_config": theme,
            "audio_url": "https://example.com/song.mp3",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    let (status, card) = get(app(state), &format!("/api/view/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(card["recipient_name"], "Sam");
    assert_eq!(card["messages"], messages);
    assert_eq!(card["theme_config"], theme);
    assert_eq!(card["audio_url"], "https://example.com/song.mp3");
    assert!(card["expires_at"].is_null());

    // created_at comes back as ISO-8601
    let created_at = card["created_at"].as_str().unwrap();
    assert!(created_at.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
}

#[tokio::test]
async fn fetching_twice_returns_identical_bodies() {
    let state = test_state();
    let (_, created) = post_json(
        app(state.clone()),
        "/api/create",
        json!({ "recipient_name": "Sam", "messages": [{ "text": "hi" }] }),
    )
    .await;
    let path = format!("/api/view/{}", created["id"].as_str().unwrap());

    let (_, first) = get(app(state.clone()), &path).await;
    let (_, second) = get(app(state), &path).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_body_reports_both_required_fields_together() {
    let (status, body) = post_json(app(test_state()), "/api/create", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "recipient_name and messages are required");
}

#[tokio::test]
async fn entry_validation_errors_come_back_as_a_list() {
    let (status, body) = post_json(
        app(test_state()),
        "/api/create",
        json!({
            "recipient_name": "Sam",
            "messages": [
                { "fontSize": 14 },
                { "text": "hi", "fontSize": 201 },
            ],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!([
            "Message text is required",
            "Font size must be between 12 and 200",
        ])
    );
}

#[tokio::test]
async fn text_at_limit_is_accepted_over_limit_rejected() {
    let state = test_state();
    let (status, _) = post_json(
        app(state.clone()),
        "/api/create",
        json!({ "recipient_name": "Sam", "messages": [{ "text": "a".repeat(500) }] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        app(state),
        "/api/create",
        json!({ "recipient_name": "Sam", "messages": [{ "text": "a".repeat(501) }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Message text must be under 500 characters");
}

#[tokio::test]
async fn non_json_content_type_is_rejected() {
    let response = app(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("recipient_name=Sam"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = split(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Content-Type must be application/json");
}

#[tokio::test]
async fn malformed_json_body_is_rejected() {
    let response = app(test_state())
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/create")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = split(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Request body must be valid JSON");
}

#[tokio::test]
async fn unknown_id_is_404() {
    let (status, body) = get(app(test_state()), "/api/view/no-such-card").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blush not found");
}

#[tokio::test]
async fn expired_card_is_410_not_404() {
    let state = test_state();
    let id = blush_db::generate_id();
    state
        .db
        .insert_card(&CardRow {
            id: id.clone(),
            recipient_name: "Sam".to_string(),
            messages: r#"[{"text":"hi"}]"#.to_string(),
            theme_config: "{}".to_string(),
            audio_url: None,
            created_at: "2020-01-01T00:00:00+00:00".to_string(),
            expires_at: Some("2020-01-08T00:00:00+00:00".to_string()),
        })
        .unwrap();

    let (status, body) = get(app(state.clone()), &format!("/api/view/{id}")).await;
    assert_eq!(status, StatusCode::GONE);
    assert_eq!(body["error"], "This blush has expired");

    // Distinct from never-existed
    let (status, _) = get(app(state), "/api/view/no-such-card").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expires_in_days_sets_expiry_after_creation_time() {
    let state = test_state();
    let (status, created) = post_json(
        app(state.clone()),
        "/api/create",
        json!({
            "recipient_name": "Sam",
            "messages": [{ "text": "hi" }],
            "expires_in_days": 7,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_str().unwrap();
    let (status, card) = get(app(state), &format!("/api/view/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let created_at: chrono::DateTime<chrono::Utc> =
        card["created_at"].as_str().unwrap().parse().unwrap();
    let expires_at: chrono::DateTime<chrono::Utc> =
        card["expires_at"].as_str().unwrap().parse().unwrap();
    assert_eq!(expires_at - created_at, chrono::Duration::days(7));
}

#[tokio::test]
async fn view_link_serves_the_same_card_data() {
    let state = test_state();
    let (_, created) = post_json(
        app(state.clone()),
        "/api/create",
        json!({ "recipient_name": "Sam", "messages": [{ "text": "hi" }] }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (api_status, api_body) = get(app(state.clone()), &format!("/api/view/{id}")).await;
    let (view_status, view_body) = get(app(state), &format!("/v/{id}")).await;

    assert_eq!(api_status, StatusCode::OK);
    assert_eq!(view_status, StatusCode::OK);
    assert_eq!(api_body, view_body);
}

#[tokio::test]
async fn corrupt_stored_blob_is_a_500_not_a_404() {
    let state = test_state();
    let id = blush_db::generate_id();
    state
        .db
        .insert_card(&CardRow {
            id: id.clone(),
            recipient_name: "Sam".to_string(),
            messages: "definitely not json".to_string(),
            theme_config: "{}".to_string(),
            audio_url: None,
            created_at: "2026-08-24T10:00:00+00:00".to_string(),
            expires_at: None,
        })
        .unwrap();

    let (status, body) = get(app(state), &format!("/api/view/{id}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
