//! Database migration tests
//!
//! Tests to ensure migrations run correctly and the schema enforces what the
//! application relies on.

use crate::common::database::TestDatabase;
use taskmanager::backend::server::run_migrations;

#[tokio::test]
async fn test_migrations_are_rerunnable() {
    let db = TestDatabase::new().await;
    let result = run_migrations(db.pool()).await;
    assert!(result.is_ok(), "Migrations should be a no-op the second time");
}

#[tokio::test]
async fn test_tables_exist() {
    let db = TestDatabase::new().await;

    for table in ["users", "tasks"] {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
        )
        .bind(table)
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(row.0, 1, "{table} table should exist");
    }
}

#[tokio::test]
async fn test_username_is_unique() {
    let db = TestDatabase::new().await;

    sqlx::query("INSERT INTO users (username, password_hash) VALUES ('alice', 'x')")
        .execute(db.pool())
        .await
        .unwrap();

    let err = sqlx::query("INSERT INTO users (username, password_hash) VALUES ('alice', 'y')")
        .execute(db.pool())
        .await
        .unwrap_err();
    assert!(err
        .as_database_error()
        .is_some_and(|e| e.is_unique_violation()));
}

#[tokio::test]
async fn test_task_requires_existing_owner() {
    let db = TestDatabase::new().await;

    let result = sqlx::query(
        "INSERT INTO tasks (user_id, title, due_date) VALUES (12345, 'orphan', '2025-01-01')",
    )
    .execute(db.pool())
    .await;
    assert!(result.is_err(), "Foreign key should reject unknown users");
}

#[tokio::test]
async fn test_status_defaults_to_pending() {
    let db = TestDatabase::new().await;

    let (user_id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (username, password_hash) VALUES ('alice', 'x') RETURNING id",
    )
    .fetch_one(db.pool())
    .await
    .unwrap();

    let (status,): (String,) = sqlx::query_as(
        "INSERT INTO tasks (user_id, title, due_date) VALUES (?, 't', '2025-01-01') RETURNING status",
    )
    .bind(user_id)
    .fetch_one(db.pool())
    .await
    .unwrap();
    assert_eq!(status, "pending");
}
