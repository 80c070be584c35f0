mod config;
mod error;
mod model;
mod relay;
mod web;

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};
use std::sync::Arc;

use config::{AllowedOrigins, Config};
use model::AnthropicClient;
use relay::Relay;
use web::routes;

// App state structure
pub struct AppState {
    pub relay: Relay,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting chat relay");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let provider = match AnthropicClient::new(&config.provider) {
        Ok(client) => {
            info!("Provider client initialized for model {}", config.provider.model);
            client
        }
        Err(e) => {
            error!("Failed to initialize provider client: {}", e);
            std::process::exit(1);
        }
    };

    if config.server.allowed_origins == AllowedOrigins::Any {
        warn!("CORS allows any origin; set CORS_ALLOWED_ORIGINS to restrict it");
    }

    let app_state = Data::new(AppState {
        relay: Relay::new(Arc::new(provider), &config.provider),
    });

    let server = config.server;
    info!("Listening on {}:{}", server.host, server.port);

    let allowed_origins = server.allowed_origins.clone();
    let max_body_bytes = server.max_body_bytes;

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(|cfg| routes::configure(cfg, max_body_bytes))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
