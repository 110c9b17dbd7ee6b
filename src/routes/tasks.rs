use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{Task, TaskInput, TaskUpdate},
    repo::tasks,
};

/// List tasks
///
/// All tasks owned by the caller, newest first.
#[get("")]
pub async fn list_tasks(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    let tasks = tasks::list(&pool, user.0).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "count": tasks.len(),
        "tasks": tasks
    })))
}

/// Create a task
///
/// The owner is always the authenticated caller; description defaults to
/// empty and completed to false.
#[post("")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    payload: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    let task = Task::new(payload.into_inner(), user.0);
    let task = tasks::create(&pool, &task).await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "task": task
    })))
}

/// Update a task
///
/// Applies only the fields present in the body. A task that does not exist
/// and a task owned by someone else both come back as 404.
#[patch("/{id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
    payload: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    let task = tasks::update(&pool, task_id.into_inner(), user.0, &payload).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "task": task
    })))
}

/// Delete a task
///
/// Same ownership opacity as update.
#[delete("/{id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let id = task_id.into_inner();
    tasks::delete(&pool, id, user.0).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Task deleted successfully",
        "deletedId": id
    })))
}
