use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use smile_discovery::config::Settings;
use smile_discovery::core::ClinicDirectory;
use smile_discovery::routes::{self, AppState};
use smile_discovery::services::{CacheManager, FirestoreClient, Geocoder};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, e);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, e))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Smile discovery service...");

    let firestore = Arc::new(
        FirestoreClient::new(
            settings.firestore.base_url.clone(),
            settings.firestore.project_id.clone(),
            settings.firestore.database_id.clone(),
            settings.firestore.collection.clone(),
            settings.firestore.api_key.clone(),
            settings.firestore.timeout_secs,
        )
        .map_err(|e| startup_error("Failed to create Firestore client", e))?,
    );

    info!(
        "Firestore client initialized (project: {}, collection: {})",
        settings.firestore.project_id, settings.firestore.collection
    );

    let geocoder = Arc::new(
        Geocoder::new(
            settings.geocoder.base_url.clone(),
            settings.geocoder.user_agent.clone(),
            settings.geocoder.timeout_secs,
        )
        .map_err(|e| startup_error("Failed to create geocoder", e))?,
    );

    let cache = Arc::new(CacheManager::new(
        settings.cache.max_entries,
        settings.cache.ttl_secs,
    ));

    info!(
        "Cache initialized ({} entries, TTL: {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    let directory = ClinicDirectory::new(settings.discovery.geohash_precision);

    let app_state = AppState {
        firestore,
        cache,
        geocoder,
        directory,
        discovery: settings.discovery.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
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
