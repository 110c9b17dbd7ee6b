use std::env;

/// Process-wide configuration, loaded once at startup and shared with the
/// handlers and the token service via `web::Data<Config>`.
///
/// `DATABASE_URL` and `JWT_SECRET` are required; starting without either is
/// a fatal condition. Everything else falls back to a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds. Defaults to one hour.
    pub jwt_ttl_secs: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_ttl_secs: env::var("JWT_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .expect("JWT_TTL_SECS must be a number"),
            server_host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }
}
