use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

/// Looks a user up by email. Case-sensitive exact match.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, created_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Inserts a new user. The unique index on `users.email` is the
/// authoritative duplicate guard; a unique violation surfaces as
/// `DuplicateEmail` even when a concurrent registration slipped past the
/// handler's existence pre-check.
pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AppError> {
    let result = sqlx::query_as::<_, User>(
        "INSERT INTO users (id, name, email, password_hash)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, email, password_hash, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db_error)) if db_error.is_unique_violation() => {
            Err(AppError::DuplicateEmail)
        }
        Err(error) => Err(error.into()),
    }
}
