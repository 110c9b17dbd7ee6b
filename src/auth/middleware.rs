use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::verify_token;
use crate::config::Config;
use crate::error::AppError;

/// Gate in front of the `/api` scope. Requests without a valid bearer token
/// are rejected with a generic 401 before they reach a handler; on success
/// the verified claims are attached to the request for the
/// [`AuthenticatedUser`](crate::auth::AuthenticatedUser) extractor.
pub struct AuthMiddleware {
    config: web::Data<Config>,
}

impl AuthMiddleware {
    pub fn new(config: web::Data<Config>) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service,
            config: self.config.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    config: web::Data<Config>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Registration and login are the only public endpoints under /api.
        let path = req.path();
        if path == "/api/auth/login" || path == "/api/auth/register" {
            let fut = self.service.call(req);
            return Box::pin(fut);
        }

        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) => match verify_token(token, &self.config) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let fut = self.service.call(req);
                    Box::pin(fut)
                }
                // A missing and an invalid token produce the same response;
                // the client learns nothing about why verification failed.
                Err(_) => Box::pin(async move { Err(AppError::Unauthorized.into()) }),
            },
            None => Box::pin(async move { Err(AppError::Unauthorized.into()) }),
        }
    }
}
