//! Task API integration tests

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{assert_error, assert_message, create_test_user, login, register, TestApp};

fn milk() -> Value {
    json!({ "title": "Buy milk", "due_date": "2025-01-01" })
}

async fn create(app: &TestApp, token: &str, body: Value) -> Value {
    let response = app.post("/api/tasks", Some(token), body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    response.json()
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let app = TestApp::new().await;

    assert_eq!(register(&app, "alice", "pw1").await.status, StatusCode::CREATED);

    let logged_in = login(&app, "alice", "pw1").await;
    assert_eq!(logged_in.status, StatusCode::OK);
    let token = logged_in.json()["token"].as_str().unwrap().to_string();

    let created = create(&app, &token, milk()).await;
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["due_date"], "2025-01-01");
    assert_eq!(created["status"], "pending");

    let listed = app.get("/api/tasks", Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.json(), json!([created]));

    assert_error(&app.get("/api/tasks", None).await, StatusCode::UNAUTHORIZED);
    assert_error(&app.get("/api/tasks", Some("garbage")).await, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_returns_full_record() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;

    let created = create(
        &app,
        &alice.token,
        json!({ "title": "Walk dog", "description": "around the park", "due_date": "2025-03-04" }),
    )
    .await;

    assert!(created["id"].as_i64().is_some());
    assert_eq!(created["user_id"], alice.id);
    assert_eq!(created["description"], "around the park");
    assert_eq!(created["status"], "pending");
}

#[tokio::test]
async fn test_create_ignores_owner_in_body() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let bob = create_test_user(&app, "bob", "pw2").await;

    let created = create(
        &app,
        &alice.token,
        json!({ "title": "Mine", "due_date": "2025-01-01", "user_id": bob.id, "status": "completed" }),
    )
    .await;
    assert_eq!(created["user_id"], alice.id);
    assert_eq!(created["status"], "pending");

    let bobs = app.get("/api/tasks", Some(&bob.token)).await;
    assert_eq!(bobs.json(), json!([]));
}

#[tokio::test]
async fn test_create_requires_title_and_due_date() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;

    for body in [
        json!({ "due_date": "2025-01-01" }),
        json!({ "title": "Buy milk" }),
        json!({ "title": "", "due_date": "2025-01-01" }),
        json!({ "title": "Buy milk", "due_date": "  " }),
    ] {
        let response = app.post("/api/tasks", Some(&alice.token), body).await;
        let message = assert_error(&response, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Title and due date are required");
    }

    let response = app
        .post(
            "/api/tasks",
            Some(&alice.token),
            json!({ "title": "Buy milk", "due_date": "tomorrow" }),
        )
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST);

    assert_eq!(app.get("/api/tasks", Some(&alice.token)).await.json(), json!([]));
}

#[tokio::test]
async fn test_update_then_read_back() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let task = create(&app, &alice.token, milk()).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let response = app
        .put(
            &uri,
            Some(&alice.token),
            json!({
                "title": "Buy oat milk",
                "description": "two cartons",
                "due_date": "2025-01-02",
                "status": "completed"
            }),
        )
        .await;
    assert_message(&response, StatusCode::OK, "Task updated successfully");

    let fetched = app.get(&uri, Some(&alice.token)).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(
        fetched.json(),
        json!({
            "id": task["id"],
            "user_id": alice.id,
            "title": "Buy oat milk",
            "description": "two cartons",
            "due_date": "2025-01-02",
            "status": "completed"
        })
    );
}

#[tokio::test]
async fn test_update_requires_title_and_due_date() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let task = create(&app, &alice.token, milk()).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let response = app
        .put(&uri, Some(&alice.token), json!({ "status": "completed" }))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST);

    let unchanged = app.get(&uri, Some(&alice.token)).await.json();
    assert_eq!(unchanged, task);
}

#[tokio::test]
async fn test_malformed_task_bodies_are_json_400() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let task = create(&app, &alice.token, milk()).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let cases = [
        (Method::POST, "/api/tasks", Some("application/json"), r#"{"title":1,"due_date":"2025-01-01"}"#),
        (Method::POST, "/api/tasks", Some("application/json"), r#"{"title":"Buy milk""#),
        (Method::POST, "/api/tasks", None, r#"{"title":"Buy milk","due_date":"2025-01-01"}"#),
        (Method::PUT, uri.as_str(), Some("application/json"), r#"{"title":[],"due_date":"2025-02-02"}"#),
    ];

    for (method, uri, content_type, body) in cases {
        let response = app
            .request_raw(method, uri, Some(&alice.token), content_type, body.to_string())
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST);
    }

    let tasks = app.get("/api/tasks", Some(&alice.token)).await.json();
    assert_eq!(tasks, json!([task]));
}

#[tokio::test]
async fn test_non_numeric_id_is_json_400() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;

    let response = app.get("/api/tasks/abc", Some(&alice.token)).await;
    assert_eq!(assert_error(&response, StatusCode::BAD_REQUEST), "Invalid path parameter");

    let response = app.put("/api/tasks/abc", Some(&alice.token), milk()).await;
    assert_error(&response, StatusCode::BAD_REQUEST);

    let response = app.delete("/api/tasks/abc", Some(&alice.token)).await;
    assert_error(&response, StatusCode::BAD_REQUEST);

    // The gate still runs first.
    let response = app.delete("/api/tasks/abc", None).await;
    assert_error(&response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_then_list() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let task = create(&app, &alice.token, milk()).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let response = app.delete(&uri, Some(&alice.token)).await;
    assert_message(&response, StatusCode::OK, "Task deleted successfully");

    assert_eq!(app.get("/api/tasks", Some(&alice.token)).await.json(), json!([]));
    assert_error(&app.delete(&uri, Some(&alice.token)).await, StatusCode::NOT_FOUND);
    assert_error(&app.get(&uri, Some(&alice.token)).await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cross_user_isolation() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let bob = create_test_user(&app, "bob", "pw2").await;

    let task = create(&app, &alice.token, milk()).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    assert_eq!(app.get("/api/tasks", Some(&bob.token)).await.json(), json!([]));
    assert_error(&app.get(&uri, Some(&bob.token)).await, StatusCode::NOT_FOUND);

    let hijack = app
        .put(
            &uri,
            Some(&bob.token),
            json!({ "title": "hijacked", "due_date": "2030-01-01", "status": "completed" }),
        )
        .await;
    assert_error(&hijack, StatusCode::NOT_FOUND);
    assert_error(&app.delete(&uri, Some(&bob.token)).await, StatusCode::NOT_FOUND);

    // Alice's task is untouched.
    let listed = app.get("/api/tasks", Some(&alice.token)).await.json();
    assert_eq!(listed, json!([task]));
}

#[tokio::test]
async fn test_foreign_and_missing_tasks_answer_alike() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let bob = create_test_user(&app, "bob", "pw2").await;
    let task = create(&app, &alice.token, milk()).await;

    let foreign = app
        .delete(&format!("/api/tasks/{}", task["id"]), Some(&bob.token))
        .await;
    let missing = app.delete("/api/tasks/999999", Some(&bob.token)).await;

    assert_eq!(foreign.status, missing.status);
    assert_eq!(foreign.text, missing.text);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_deletes_succeed_once() {
    let app = Arc::new(TestApp::new().await);
    let alice = create_test_user(&app, "alice", "pw1").await;
    let task = create(&app, &alice.token, milk()).await;
    let uri = format!("/api/tasks/{}", task["id"]);

    let spawn_delete = |app: Arc<TestApp>, uri: String, token: String| {
        tokio::spawn(async move { app.delete(&uri, Some(&token)).await.status })
    };
    let first = spawn_delete(app.clone(), uri.clone(), alice.token.clone());
    let second = spawn_delete(app.clone(), uri.clone(), alice.token.clone());

    let mut statuses = vec![first.await.unwrap(), second.await.unwrap()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::NOT_FOUND]);
}

#[tokio::test]
async fn test_list_only_own_tasks_in_insertion_order() {
    let app = TestApp::new().await;
    let alice = create_test_user(&app, "alice", "pw1").await;
    let bob = create_test_user(&app, "bob", "pw2").await;

    let first = create(&app, &alice.token, milk()).await;
    create(&app, &bob.token, json!({ "title": "Bob's", "due_date": "2025-05-05" })).await;
    let second = create(&app, &alice.token, json!({ "title": "Second", "due_date": "2025-01-03" })).await;

    let listed = app.get("/api/tasks", Some(&alice.token)).await.json();
    assert_eq!(listed, json!([first, second]));
}
