use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

use crate::{
    auth::{generate_token, hash_password, verify_password, AuthenticatedUser},
    config::Config,
    error::AppError,
    models::{LoginRequest, RegisterRequest, UserPublic},
    repo::users,
};

/// Body of a successful registration or login.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserPublic,
}

/// Register a new user
///
/// Creates the account and returns a bearer token for it.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    // Fast path only; the unique index on users.email is the real guard
    // against a concurrent registration with the same address.
    if users::find_by_email(&pool, &payload.email).await?.is_some() {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(&payload.password)?;
    let user = users::create(&pool, &payload.name, &payload.email, &password_hash).await?;
    let token = generate_token(user.id, &config)?;

    Ok(HttpResponse::Created().json(AuthResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// Login
///
/// Authenticates by email and password and returns a bearer token.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    config: web::Data<Config>,
    payload: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    payload.validate()?;

    // Unknown email and wrong password are answered identically.
    let user = users::find_by_email(&pool, &payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let token = generate_token(user.id, &config)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// Current user
///
/// Returns the authenticated user's record, without the password hash.
#[get("/me")]
pub async fn me(
    pool: web::Data<PgPool>,
    user: AuthenticatedUser,
) -> Result<impl Responder, AppError> {
    // The token verified but the account may have gone away since issuance.
    let user = users::find_by_id(&pool, user.0)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "user": UserPublic::from(user)
    })))
}
