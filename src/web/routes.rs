use actix_cors::Cors;
use actix_web::web;
use log::warn;

use crate::config::AllowedOrigins;
use crate::error::RelayError;
use crate::web::handlers;

pub fn configure(cfg: &mut web::ServiceConfig, max_body_bytes: usize) {
    cfg.app_data(json_config(max_body_bytes))
        .route("/", web::get().to(handlers::health_check))
        .route("/health", web::get().to(handlers::health_check))
        .route("/chat", web::post().to(handlers::chat));
}

// Extractor failures surface as validation errors with a JSON `detail` body.
fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .error_handler(|err, _req| {
            warn!("Rejected chat request: {}", err);
            RelayError::Validation(err.to_string()).into()
        })
}

pub fn cors(origins: &AllowedOrigins) -> Cors {
    let cors = Cors::default().allow_any_method().allow_any_header();

    match origins {
        AllowedOrigins::Any => cors.allow_any_origin(),
        AllowedOrigins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}
