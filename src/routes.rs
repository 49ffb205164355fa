use actix_web::{HttpResponse, middleware::from_fn, web};
use serde_json::json;

use crate::{
    api::{health, profile},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            // Public routes
            .service(web::resource("/register").route(web::post().to(handlers::register)))
            .service(web::resource("/login").route(web::post().to(handlers::login)))
            .service(web::resource("/health").route(web::get().to(health::health)))
            // Protected routes: the gate re-verifies credentials per call
            .service(
                web::scope("")
                    .wrap(from_fn(auth_middleware))
                    .service(
                        web::resource("/profile")
                            .route(web::get().to(profile::get_profile))
                            .route(web::put().to(profile::update_profile)),
                    )
                    .service(web::resource("/logout").route(web::post().to(handlers::logout))),
            ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "status": false,
        "message": "Route not found"
    }))
}
