use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

lazy_static! {
    static ref LOWERCASE_RE: Regex = Regex::new(r"[a-z]").unwrap();
    static ref UPPERCASE_RE: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref DIGIT_RE: Regex = Regex::new(r"[0-9]").unwrap();
}

/// A user row as stored in the database. The password hash never leaves the
/// server; responses carry [`UserPublic`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The client-facing projection of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Registration payload. Strict: unknown fields are rejected.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 30, message = "Name must be between 3 and 30 characters"))]
    pub name: String,
    #[validate(
        email(message = "Email must be a valid email address"),
        length(min = 6, max = 50, message = "Email must be between 6 and 50 characters")
    )]
    pub email: String,
    #[validate(
        length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"),
        custom = "password_character_classes"
    )]
    pub password: String,
}

/// Login payload. Unknown fields (e.g. a leftover `name`) are silently
/// stripped rather than rejected, unlike registration.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        email(message = "Email must be a valid email address"),
        length(min = 6, max = 50, message = "Email must be between 6 and 50 characters")
    )]
    pub email: String,
    #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
    pub password: String,
}

// The three-class rule is a lookahead in the usual PCRE form, which the
// `regex` crate does not support, so each class is checked on its own.
fn password_character_classes(password: &str) -> Result<(), ValidationError> {
    if LOWERCASE_RE.is_match(password)
        && UPPERCASE_RE.is_match(password)
        && DIGIT_RE.is_match(password)
    {
        return Ok(());
    }
    let mut error = ValidationError::new("password_character_classes");
    error.message = Some(
        "Password must contain at least one uppercase letter, one lowercase letter, and one number"
            .into(),
    );
    Err(error)
}
