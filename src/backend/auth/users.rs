/**
 * User Model and Credential Store
 *
 * This module handles user records and the two credential operations the
 * rest of the server relies on:
 *
 * - `register_user` stores a bcrypt hash (never the plaintext) and returns
 *   the new user id
 * - `verify_credentials` checks a username/password pair and returns the
 *   full user record for token issuance
 *
 * bcrypt is CPU-bound, so hashing and verification run on the blocking
 * thread pool rather than on the async executor.
 */

use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;

const REQUIRED_MESSAGE: &str = "Username and password are required";

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    /// Surrogate user ID assigned on creation
    pub id: i64,
    /// Unique, case-sensitive username
    pub username: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Credential store failures
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Missing username or password
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("username already exists")]
    DuplicateUsername,

    /// No user with the given username
    #[error("user not found")]
    NotFound,

    /// Password does not match the stored hash
    #[error("invalid credential")]
    InvalidCredential,

    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    #[error("password hashing task failed: {0}")]
    HashingTask(#[from] tokio::task::JoinError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Register a new user
///
/// # Errors
///
/// * `InvalidInput` - username (blank) or password (empty) missing
/// * `DuplicateUsername` - the `UNIQUE` constraint on `users.username` fired
pub async fn register_user(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    bcrypt_cost: u32,
) -> Result<i64, CredentialError> {
    validate_credentials(username, password)?;

    let password_hash = hash_password(password, bcrypt_cost).await?;

    match create_user(pool, username, &password_hash).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "User registered: {}", user.username);
            Ok(user.id)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::warn!("Username already exists: {}", username);
            Err(CredentialError::DuplicateUsername)
        }
        Err(e) => Err(e.into()),
    }
}

/// Verify a username/password pair
///
/// # Errors
///
/// * `InvalidInput` - username or password missing
/// * `NotFound` - no such user
/// * `InvalidCredential` - password does not match
pub async fn verify_credentials(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<User, CredentialError> {
    validate_credentials(username, password)?;

    let user = get_user_by_username(pool, username)
        .await?
        .ok_or(CredentialError::NotFound)?;

    if !verify_password(password, &user.password_hash).await? {
        return Err(CredentialError::InvalidCredential);
    }

    Ok(user)
}

/// Create a new user row from an already hashed password
pub async fn create_user(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash)
        VALUES (?, ?)
        RETURNING id, username, password_hash
        "#,
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Hash a password with a fresh random salt
pub async fn hash_password(password: &str, cost: u32) -> Result<String, CredentialError> {
    let password = password.to_owned();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hash)
}

/// Compare a password against a stored bcrypt hash
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, CredentialError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    let valid =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash)).await??;
    Ok(valid)
}

fn validate_credentials(username: &str, password: &str) -> Result<(), CredentialError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(CredentialError::InvalidInput(REQUIRED_MESSAGE));
    }
    Ok(())
}
