use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    /// May be empty; defaults to `""` on creation.
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// The owning user. Every query filters on this.
    pub user_id: Uuid,
}

/// Input for creating a task. Unknown fields are rejected.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TaskInput {
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Partial update for a task. Only the fields present in the request are
/// applied; each carries the same constraints as [`TaskInput`].
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct TaskUpdate {
    #[validate(length(min = 3, max = 100, message = "Title must be between 3 and 100 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl Task {
    /// Builds a new task owned by `user_id`, filling in the generated id,
    /// the creation timestamp, and the field defaults.
    pub fn new(input: TaskInput, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description.unwrap_or_default(),
            completed: input.completed.unwrap_or(false),
            created_at: Utc::now(),
            user_id,
        }
    }
}
