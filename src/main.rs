use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::PgPool;

use tasknest::auth::AuthMiddleware;
use tasknest::config::Config;
use tasknest::error::AppError;
use tasknest::routes;
use tasknest::routes::meta;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPool::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let bind_addr = (config.server_host.clone(), config.server_port);
    log::info!(
        "Starting Tasknest server at http://{}:{}",
        bind_addr.0,
        bind_addr.1
    );

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(config.clone())
            // Body deserialization failures surface in the same 400 envelope
            // as constraint violations.
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::Validation(err.to_string()).into()
            }))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(meta::index)
            .service(meta::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware::new(config.clone()))
                    .configure(routes::config),
            )
            .default_service(web::route().to(meta::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
