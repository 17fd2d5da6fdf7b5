// ABOUTME: End-to-end tests for the exercise tracker HTTP API
// ABOUTME: Drives the axum router with form-encoded requests and checks wire shapes

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::util::ServiceExt;

use exercise_tracker::config::environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
};
use exercise_tracker::database_plugins::{factory::Database, DatabaseProvider};
use exercise_tracker::resources::ServerResources;
use exercise_tracker::server::HttpServer;

async fn test_router() -> Router {
    let database = Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    let config = ServerConfig {
        http_port: 0,
        log_level: LogLevel::Info,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    };

    let resources = Arc::new(ServerResources::new(database, Arc::new(config)));
    HttpServer::new(resources).router()
}

async fn send_form(
    app: &Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> (StatusCode, serde_json::Value) {
    let body = serde_urlencoded::to_string(fields).expect("Failed to encode form body");
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = serde_json::from_slice(&bytes).expect("Response body is not JSON");

    (status, json)
}

async fn send_get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    let json = serde_json::from_slice(&bytes).expect("Response body is not JSON");

    (status, json)
}

async fn register_user(app: &Router, username: &str) -> String {
    let (status, json) = send_form(app, "/api/users/", &[("username", username)]).await;
    assert_eq!(status, StatusCode::OK);
    json["_id"]
        .as_str()
        .expect("Registration response missing _id")
        .to_owned()
}

#[tokio::test]
async fn test_create_user_is_idempotent() {
    let app = test_router().await;

    let (status, json) = send_form(&app, "/api/users/", &[("username", "alice")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["username"], "alice");
    let first_id = json["_id"].as_str().expect("missing _id").to_owned();

    // Second registration returns the same record, no error
    let (status, json) = send_form(&app, "/api/users/", &[("username", "alice")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["_id"], first_id.as_str());
    assert_eq!(json["username"], "alice");

    // Exactly one record exists
    let (status, json) = send_get(&app, "/api/users/").await;
    assert_eq!(status, StatusCode::OK);
    let users = json.as_array().expect("user list is not an array");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["username"], "alice");
    assert_eq!(users[0]["_id"], first_id.as_str());
}

#[tokio::test]
async fn test_create_user_without_trailing_slash() {
    let app = test_router().await;

    let (status, json) = send_form(&app, "/api/users", &[("username", "bob")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["username"], "bob");
}

#[tokio::test]
async fn test_empty_username_is_rejected_with_no_record() {
    let app = test_router().await;

    let (status, json) = send_form(&app, "/api/users/", &[("username", "")]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "Username is required");

    let (_, json) = send_form(&app, "/api/users/", &[]).await;
    assert_eq!(json["error"], "Username is required");

    let (status, json) = send_get(&app, "/api/users/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().expect("not an array").len(), 0);
}

#[tokio::test]
async fn test_record_exercise_response_shape() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;

    let (status, json) = send_form(
        &app,
        &format!("/api/users/{user_id}/exercises"),
        &[
            ("description", "run"),
            ("duration", "30"),
            ("date", "2024-01-01"),
        ],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["_id"], user_id.as_str());
    assert_eq!(json["username"], "alice");
    assert_eq!(json["description"], "run");
    assert_eq!(json["duration"], 30);
    assert_eq!(json["date"], "Mon Jan 01 2024");
}

#[tokio::test]
async fn test_record_exercise_defaults_to_current_date() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;

    let (status, json) = send_form(
        &app,
        &format!("/api/users/{user_id}/exercises"),
        &[("description", "swim"), ("duration", "45")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let expected = chrono::Utc::now().date_naive().format("%a %b %d %Y");
    assert_eq!(json["date"], expected.to_string());
}

#[tokio::test]
async fn test_record_exercise_validation_failures_write_nothing() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;
    let uri = format!("/api/users/{user_id}/exercises");

    let cases: &[&[(&str, &str)]] = &[
        // Missing description
        &[("duration", "30")],
        // Empty description
        &[("description", ""), ("duration", "30")],
        // Non-numeric duration
        &[("description", "run"), ("duration", "abc")],
        // Zero duration
        &[("description", "run"), ("duration", "0")],
        // Negative duration
        &[("description", "run"), ("duration", "-5")],
        // Unparseable date
        &[
            ("description", "run"),
            ("duration", "30"),
            ("date", "yesterday"),
        ],
    ];

    for fields in cases {
        let (status, json) = send_form(&app, &uri, fields).await;
        assert_eq!(status, StatusCode::OK, "case: {fields:?}");
        assert!(json["error"].is_string(), "case: {fields:?}");
    }

    // None of the failed attempts wrote a record
    let (_, json) = send_get(&app, &format!("/api/users/{user_id}/logs")).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_record_exercise_unknown_user() {
    let app = test_router().await;

    let random_id = uuid::Uuid::new_v4();
    let (status, json) = send_form(
        &app,
        &format!("/api/users/{random_id}/exercises"),
        &[("description", "run"), ("duration", "30")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "User not found!");

    // A malformed id behaves like an unknown one
    let (status, json) = send_form(
        &app,
        "/api/users/not-a-uuid/exercises",
        &[("description", "run"), ("duration", "30")],
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "User not found!");
}

#[tokio::test]
async fn test_logs_filtering_by_from_date() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;
    let uri = format!("/api/users/{user_id}/exercises");

    send_form(
        &app,
        &uri,
        &[
            ("description", "run"),
            ("duration", "30"),
            ("date", "2024-01-01"),
        ],
    )
    .await;
    send_form(
        &app,
        &uri,
        &[
            ("description", "swim"),
            ("duration", "45"),
            ("date", "2024-01-10"),
        ],
    )
    .await;

    let (status, json) =
        send_get(&app, &format!("/api/users/{user_id}/logs?from=2024-01-05")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["_id"], user_id.as_str());
    assert_eq!(json["username"], "alice");
    // Count is total log volume, not the filtered page size
    assert_eq!(json["count"], 2);

    let log = json["log"].as_array().expect("log is not an array");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["description"], "swim");
    assert_eq!(log[0]["duration"], 45);
    assert_eq!(log[0]["date"], "Wed Jan 10 2024");
    // Per-entry projection drops ids
    assert!(log[0].get("_id").is_none());
}

#[tokio::test]
async fn test_logs_limit_keeps_earliest_dates() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;
    let uri = format!("/api/users/{user_id}/exercises");

    // Inserted out of date order on purpose
    send_form(
        &app,
        &uri,
        &[
            ("description", "swim"),
            ("duration", "45"),
            ("date", "2024-01-10"),
        ],
    )
    .await;
    send_form(
        &app,
        &uri,
        &[
            ("description", "run"),
            ("duration", "30"),
            ("date", "2024-01-01"),
        ],
    )
    .await;

    let (status, json) = send_get(&app, &format!("/api/users/{user_id}/logs?limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);

    let log = json["log"].as_array().expect("log is not an array");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0]["description"], "run");
    assert_eq!(log[0]["date"], "Mon Jan 01 2024");
}

#[tokio::test]
async fn test_logs_sorted_ascending_and_range_inclusive() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;
    let uri = format!("/api/users/{user_id}/exercises");

    for (description, date) in [
        ("yoga", "2024-03-01"),
        ("run", "2024-01-01"),
        ("swim", "2024-02-01"),
    ] {
        send_form(
            &app,
            &uri,
            &[
                ("description", description),
                ("duration", "30"),
                ("date", date),
            ],
        )
        .await;
    }

    let (_, json) = send_get(
        &app,
        &format!("/api/users/{user_id}/logs?from=2024-01-01&to=2024-02-01"),
    )
    .await;
    assert_eq!(json["count"], 3);

    let log = json["log"].as_array().expect("log is not an array");
    let descriptions: Vec<&str> = log
        .iter()
        .map(|entry| entry["description"].as_str().expect("missing description"))
        .collect();
    // Both bounds inclusive, ascending by date
    assert_eq!(descriptions, vec!["run", "swim"]);
}

#[tokio::test]
async fn test_logs_malformed_filters_are_ignored() {
    let app = test_router().await;
    let user_id = register_user(&app, "alice").await;
    let uri = format!("/api/users/{user_id}/exercises");

    send_form(
        &app,
        &uri,
        &[
            ("description", "run"),
            ("duration", "30"),
            ("date", "2024-01-01"),
        ],
    )
    .await;

    for query in [
        "from=banana",
        "from=2024-1-1",
        "to=01/02/2024",
        "limit=abc",
        "limit=0",
        "limit=-3",
        "from=banana&to=nonsense&limit=zero",
    ] {
        let (status, json) =
            send_get(&app, &format!("/api/users/{user_id}/logs?{query}")).await;
        assert_eq!(status, StatusCode::OK, "query: {query}");
        assert_eq!(json["count"], 1, "query: {query}");
        assert_eq!(
            json["log"].as_array().expect("log is not an array").len(),
            1,
            "query: {query}"
        );
    }
}

#[tokio::test]
async fn test_logs_unknown_user() {
    let app = test_router().await;

    let random_id = uuid::Uuid::new_v4();
    let (status, json) = send_get(&app, &format!("/api/users/{random_id}/logs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["error"], "User not found!");
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = test_router().await;

    let (status, json) = send_get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");

    let (status, json) = send_get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
}
