use actix_web::web;

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(web::resource("/register").route(web::post().to(handlers::auth::register)))
            .service(web::resource("/login").route(web::post().to(handlers::auth::login))),
    )
    .service(
        web::scope("/requests")
            .service(
                web::resource("")
                    .route(web::get().to(handlers::pickup_requests::index))
                    .route(web::post().to(handlers::pickup_requests::create)),
            )
            .service(
                web::resource("/{id}/status")
                    .route(web::put().to(handlers::pickup_requests::update_status)),
            ),
    );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index::banner))
        .route("/health", web::get().to(handlers::index::health))
        .service(web::scope("/api").configure(scoped_config));
}
