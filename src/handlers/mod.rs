pub mod auth_handlers;
pub mod event_handlers;
pub mod participant_handlers;

use actix_web::{HttpResponse, web};

use crate::errors::ErrorBody;

/// Mount the full API surface. Shared by `main` and the test servers so
/// both always run the same routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_cfg = web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorBody::new(err.to_string());
        actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
            .into()
    });

    cfg.service(
        web::scope("/api")
            .app_data(json_cfg)
            .route("/events", web::get().to(event_handlers::list))
            .route("/events", web::post().to(event_handlers::create))
            .route("/events/{id}", web::get().to(event_handlers::read))
            .route("/events/{id}", web::put().to(event_handlers::update))
            .route("/events/{id}", web::delete().to(event_handlers::delete))
            .route(
                "/participants/register",
                web::post().to(participant_handlers::register),
            )
            .route("/auth/register", web::post().to(auth_handlers::register))
            .route("/auth/login", web::post().to(auth_handlers::login))
            .route("/auth/logout", web::post().to(auth_handlers::logout)),
    );
}
