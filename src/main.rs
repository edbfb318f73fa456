// src/main.rs
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::path::Path;

use zone_matcher::api::{configure_routes, AppState};
use zone_matcher::config::{MatcherConfig, ServerConfig};

fn init_logging(log_config: &str) {
    if Path::new(log_config).exists() {
        match log4rs::init_file(log_config, Default::default()) {
            Ok(()) => return,
            Err(e) => eprintln!("Failed to initialize log4rs from {}: {}", log_config, e),
        }
    }
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("zone_matcher=info,actix_web=info"));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    init_logging(&server_config.log_config);

    let matcher_config = MatcherConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    log::info!("Matcher defaults: {:?}", matcher_config);

    let host = server_config.host.clone();
    let port = server_config.port;
    let state = web::Data::new(AppState::new(matcher_config, server_config.min_candles));

    log::info!("Starting server on http://{}:{}", host, port);
    log::info!("  GET  /health");
    log::info!("  POST /analyze");
    log::info!("  POST /zones");

    let cors_origin = server_config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
            .max_age(3600);
        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(16 * 1024 * 1024))
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
