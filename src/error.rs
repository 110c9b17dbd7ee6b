//!
//! # Error Handling
//!
//! Defines the `AppError` type used throughout the application. It is the
//! single error taxonomy every handler boundary maps into, and its
//! `ResponseError` implementation is the one place domain errors are
//! translated into transport status codes and JSON bodies.
//!
//! `From` implementations for `sqlx::Error`, `validator::ValidationErrors`,
//! `jsonwebtoken::errors::Error`, and `bcrypt::BcryptError` let handlers
//! propagate failures with the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All failure modes a request can end in.
///
/// Two variants are deliberately information-free towards the client:
/// `InvalidCredentials` does not distinguish an unknown email from a wrong
/// password, and `Unauthorized` does not say why token verification failed.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or constraint-violating input (HTTP 400). Carries the
    /// message of the first violated constraint.
    Validation(String),
    /// Registration attempted with an email that is already taken (HTTP 400).
    DuplicateEmail,
    /// Login failed; wrong email and wrong password are indistinguishable
    /// (HTTP 400).
    InvalidCredentials,
    /// Missing, malformed, or expired bearer token (HTTP 401).
    Unauthorized,
    /// The resource does not exist, or is owned by someone else (HTTP 404).
    NotFound(String),
    /// Anything else, including store and network faults (HTTP 500).
    /// The detail is logged server-side and never echoed to the client.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::DuplicateEmail => write!(f, "Email already exists"),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Unauthorized => write!(f, "Not authorized"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": msg
            })),
            AppError::DuplicateEmail => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Email already exists"
            })),
            AppError::InvalidCredentials => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Invalid credentials"
            })),
            AppError::Unauthorized => HttpResponse::Unauthorized().json(json!({
                "success": false,
                "message": "Not authorized"
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": msg
            })),
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::InternalServerError().json(json!({
                    "success": false,
                    "message": "Internal server error"
                }))
            }
        }
    }
}

/// Picks the message of one violated constraint out of a `ValidationErrors`.
///
/// The client is shown a single human-readable violation, not the full set.
fn first_violation(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .next()
        .unwrap_or_else(|| "Invalid input".to_string())
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> AppError {
        AppError::Validation(first_violation(&errors))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        match error {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".into()),
            _ => AppError::Internal(error.to_string()),
        }
    }
}

/// Token verification failures never leak their cause to the client.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> AppError {
        AppError::Unauthorized
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(format!("bcrypt failure: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_error_responses() {
        let response = AppError::Validation("Title too short".into()).error_response();
        assert_eq!(response.status(), 400);

        let response = AppError::DuplicateEmail.error_response();
        assert_eq!(response.status(), 400);

        let response = AppError::InvalidCredentials.error_response();
        assert_eq!(response.status(), 400);

        let response = AppError::Unauthorized.error_response();
        assert_eq!(response.status(), 401);

        let response = AppError::NotFound("Task not found".into()).error_response();
        assert_eq!(response.status(), 404);

        let response = AppError::Internal("connection refused".into()).error_response();
        assert_eq!(response.status(), 500);
    }

    #[test]
    fn test_first_violation_uses_constraint_message() {
        let mut errors = ValidationErrors::new();
        let mut violation = ValidationError::new("length");
        violation.message = Some("Name must be between 3 and 30 characters".into());
        errors.add("name", violation);

        match AppError::from(errors) {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Name must be between 3 and 30 characters")
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_first_violation_falls_back_to_field_name() {
        let mut errors = ValidationErrors::new();
        errors.add("email", ValidationError::new("email"));

        match AppError::from(errors) {
            AppError::Validation(msg) => assert_eq!(msg, "email is invalid"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.error_response().status(), 404);
    }
}
