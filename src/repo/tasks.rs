use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskUpdate};

/// All tasks owned by `owner`, newest creation time first.
pub async fn list(pool: &PgPool, owner: Uuid) -> Result<Vec<Task>, AppError> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT id, title, description, completed, created_at, user_id
         FROM tasks WHERE user_id = $1
         ORDER BY created_at DESC",
    )
    .bind(owner)
    .fetch_all(pool)
    .await?;

    Ok(tasks)
}

pub async fn create(pool: &PgPool, task: &Task) -> Result<Task, AppError> {
    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (id, title, description, completed, created_at, user_id)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id, title, description, completed, created_at, user_id",
    )
    .bind(task.id)
    .bind(&task.title)
    .bind(&task.description)
    .bind(task.completed)
    .bind(task.created_at)
    .bind(task.user_id)
    .fetch_one(pool)
    .await?;

    Ok(task)
}

/// Applies the fields present in `patch` to the task identified by
/// `(id, owner)`. A missing row and a row owned by someone else are both
/// `NotFound`; the caller cannot tell them apart.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    owner: Uuid,
    patch: &TaskUpdate,
) -> Result<Task, AppError> {
    let task = sqlx::query_as::<_, Task>(
        "UPDATE tasks
         SET title = COALESCE($3, title),
             description = COALESCE($4, description),
             completed = COALESCE($5, completed)
         WHERE id = $1 AND user_id = $2
         RETURNING id, title, description, completed, created_at, user_id",
    )
    .bind(id)
    .bind(owner)
    .bind(patch.title.as_deref())
    .bind(patch.description.as_deref())
    .bind(patch.completed)
    .fetch_optional(pool)
    .await?;

    task.ok_or_else(|| AppError::NotFound("Task not found".into()))
}

/// Deletes the task identified by `(id, owner)`, with the same ownership
/// opacity as [`update`].
pub async fn delete(pool: &PgPool, id: Uuid, owner: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(owner)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(())
}
