use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mutual_match::config::{LoggingSettings, Settings, StorageBackend};
use mutual_match::core::MatchResolver;
use mutual_match::error::handle_json_payload_error;
use mutual_match::routes::{self, AppState};
use mutual_match::services::{AdminAuth, InMemoryStore, MatchingService, ParticipantStore, PostgresClient};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber; RUST_LOG wins over the configured level
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.is_pretty() {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Tracing is configured from settings, so config errors go to stderr
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting Mutual Match service...");

    let store: Arc<dyn ParticipantStore> = match settings.database.backend {
        StorageBackend::Postgres => {
            let db = &settings.database;
            let client = PostgresClient::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;

            info!("PostgreSQL store initialized (max: {} connections)", db.max_connections.unwrap_or(10));
            Arc::new(client)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            Arc::new(InMemoryStore::new())
        }
    };

    if settings.admin.password_hash.is_empty() {
        warn!("No admin password hash configured; admin login will always fail");
    }

    let app_state = AppState {
        matching: Arc::new(MatchingService::new(store, MatchResolver::new())),
        auth: Arc::new(AdminAuth::new(settings.admin.password_hash.clone())),
        frontend_url: settings.links.frontend_url.clone(),
        max_upload_bytes: settings.server.max_upload_bytes.unwrap_or(1024 * 1024),
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
