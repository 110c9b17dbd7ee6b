use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;
use crate::error::AppError;

/// Claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The authenticated user's id.
    pub sub: Uuid,
    /// Issuance timestamp, seconds since epoch.
    pub iat: usize,
    /// Expiry timestamp, seconds since epoch.
    pub exp: usize,
}

/// Issues a signed token for `user_id`, expiring after the configured TTL.
///
/// The signing secret comes from the [`Config`] built once at startup;
/// rotating it invalidates every outstanding token.
pub fn generate_token(user_id: Uuid, config: &Config) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now + config.jwt_ttl_secs as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to generate token: {}", e)))
}

/// Verifies a token and decodes its claims.
///
/// Fails closed: bad signature, malformed payload, and elapsed expiry all
/// come back as `Unauthorized`, with no clock-skew leeway.
pub fn verify_token(token: &str, config: &Config) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(data.claims)
}
