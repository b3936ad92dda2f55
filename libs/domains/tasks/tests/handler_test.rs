//! Handler tests for Tasks domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! Only the tasks router is exercised here; docs, middleware and the
//! operational endpoints are covered by the application tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_tasks::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestDatabase};
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app(db: &TestDatabase) -> Router {
    let service = TaskService::new(SeaOrmTaskRepository::new(db.connection()));
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, body: Value) -> TaskResponse {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_task_handler_returns_201() {
    let db = TestDatabase::new().await;
    let app = app(&db);
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let task = create(
        &app,
        json!({
            "title": builder.title("test"),
            "description": "Handler test",
            "status": "completed"
        }),
    )
    .await;

    assert!(task.id > 0);
    assert_eq!(task.title, builder.title("test"));
    assert_eq!(task.description.as_deref(), Some("Handler test"));
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_create_task_defaults_status_to_pending() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let task = create(&app, json!({"title": "Only a title"})).await;

    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.description, None);
}

#[tokio::test]
async fn test_create_task_handler_validates_input() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for body in [
        json!({"title": ""}),
        json!({"description": "no title"}),
        json!({"title": "x".repeat(201)}),
        json!({"title": "ok", "status": "archived"}),
        json!({"title": "ok", "description": "d".repeat(1001)}),
        json!({"title": null}),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/", body.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body: {}",
            body
        );
    }
}

#[tokio::test]
async fn test_create_task_validation_error_names_field() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .oneshot(json_request("POST", "/", json!({"title": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["details"]["title"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_422() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_tasks_handler() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app.clone().oneshot(empty_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<TaskResponse> = json_body(response.into_body()).await;
    assert!(tasks.is_empty());

    for i in 1..=5 {
        create(&app, json!({"title": format!("Task {}", i)})).await;
    }

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/?skip=1&limit=2"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let tasks: Vec<TaskResponse> = json_body(response.into_body()).await;
    let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Task 2", "Task 3"]);
}

#[tokio::test]
async fn test_list_tasks_rejects_bad_pagination() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    for uri in ["/?skip=-1", "/?limit=-1", "/?skip=abc", "/?limit=1.5"] {
        let response = app.clone().oneshot(empty_request("GET", uri)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "uri: {}",
            uri
        );
    }
}

#[tokio::test]
async fn test_get_task_handler() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let created = create(&app, json!({"title": "Fetch me"})).await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(fetched, created);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Task with id 999 not found");

    let response = app.oneshot(empty_request("GET", "/abc")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_task_handler_partial() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let created = create(
        &app,
        json!({"title": "Original", "description": "keep me"}),
    )
    .await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", created.id),
            json!({"title": "Updated"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.description.as_deref(), Some("keep me"));
    assert_eq!(updated.status, TaskStatus::Pending);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_update_task_handler_errors() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/999", json!({"title": "x"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let created = create(&app, json!({"title": "Stay"})).await;
    for body in [
        json!({"title": ""}),
        json!({"title": null}),
        json!({"status": "archived"}),
        json!({"status": null}),
    ] {
        let response = app
            .clone()
            .oneshot(json_request("PUT", &format!("/{}", created.id), body.clone()))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "body: {}",
            body
        );
    }

    // Nothing was written by the rejected requests
    let response = app
        .oneshot(empty_request("GET", &format!("/{}", created.id)))
        .await
        .unwrap();
    let fetched: TaskResponse = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_task_handler() {
    let db = TestDatabase::new().await;
    let app = app(&db);

    let created = create(&app, json!({"title": "Delete me"})).await;
    let uri = format!("/{}", created.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .clone()
        .oneshot(empty_request("GET", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
