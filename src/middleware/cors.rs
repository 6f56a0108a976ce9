use crate::config::CorsSettings;
use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Cross-origin access for the browser client. Only the configured origins are
/// allowed; with none configured, cross-origin requests are refused.
pub fn cors(settings: &CorsSettings) -> Cors {
    settings.allowed_origins.iter().fold(
        Cors::default()
            .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials()
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}
