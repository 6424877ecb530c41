use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use realty_match::config::Settings;
use realty_match::core::Matcher;
use realty_match::error::{handle_json_payload_error, handle_query_payload_error};
use realty_match::routes::{self, matches::AppState};
use realty_match::services::ListingCatalog;
use realty_match::telemetry;
use std::io::{Error, ErrorKind};
use tracing::{info, error};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        Error::new(ErrorKind::InvalidInput, e)
    })?;

    telemetry::init(&settings.logging).map_err(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        Error::new(ErrorKind::Other, e.to_string())
    })?;

    info!("Starting Realty Match service...");

    let catalog = ListingCatalog::load(&settings.catalog.path)
        .await
        .map_err(|e| {
            error!("Failed to load listing catalog: {}", e);
            Error::new(ErrorKind::NotFound, e)
        })?;

    if catalog.is_empty() {
        error!("Listing catalog {} is empty, every search will return no matches", settings.catalog.path);
    }

    let config = settings.scoring.match_config();
    let matcher = Matcher::new(config);

    info!("Matcher initialized with weights: {:?}", config.weights);
    info!("Matcher thresholds: {:?}", config.thresholds);

    let app_state = AppState {
        catalog,
        matcher,
        matching: settings.matching.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
