use actix_web::{get, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

/// Service banner with the endpoint map.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to the Tasknest API",
        "endpoints": {
            "auth": "/api/auth",
            "tasks": "/api/tasks"
        }
    }))
}

/// Health check endpoint
///
/// Returns the current status of the API and timestamp.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now()
    }))
}

/// Fallback for any route the router did not match.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({
        "message": "Route not found"
    }))
}
