pub mod auth;
pub mod meta;
pub mod tasks;

use actix_web::web;

/// Registers the `/auth` and `/tasks` scopes. Mounted under `/api` by the
/// application factory, behind the auth guard.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login)
            .service(auth::me),
    )
    .service(
        web::scope("/tasks")
            .service(tasks::list_tasks)
            .service(tasks::create_task)
            .service(tasks::update_task)
            .service(tasks::delete_task),
    );
}
