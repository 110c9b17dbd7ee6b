use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};
use uuid::Uuid;

use crate::auth::token::Claims;
use crate::error::AppError;

/// The authenticated principal, extracted from the claims that
/// [`AuthMiddleware`](crate::auth::AuthMiddleware) verified and attached.
///
/// Handlers that only need the caller's identity take this instead of
/// re-fetching the user record.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub Uuid);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().map(|claims| claims.sub) {
            Some(user_id) => ready(Ok(AuthenticatedUser(user_id))),
            // Reachable only if the guard was not applied to this route;
            // rejecting is the safe default.
            None => ready(Err(AppError::Unauthorized.into())),
        }
    }
}
