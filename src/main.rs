use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use jobnix_match::config::{LoggingSettings, Settings};
use jobnix_match::core::Recommender;
use jobnix_match::models::ScoringWeights;
use jobnix_match::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use jobnix_match::services::{AnalyticsCache, EngineOptions, MatchEngine, PostgresStore};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// RUST_LOG takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            return Err(startup_error("Failed to load configuration", e));
        }
    };

    init_logging(&settings.logging);
    info!("Starting JobNix matching service...");

    let weights = ScoringWeights::from(&settings.scoring.weights);
    let recommender = Recommender::new(weights).skip_expired(settings.matching.skip_expired);
    if let Err(e) = recommender.scorer().validate() {
        return Err(startup_error("Invalid scoring configuration", e));
    }

    info!("Recommender initialized with weights: {:?}", weights);

    let store = PostgresStore::from_settings(
        &settings.database.url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
        settings.database.idle_timeout_secs,
    )
    .await
    .map_err(|e| startup_error("Failed to connect to PostgreSQL", e))?;

    info!(
        "PostgreSQL store initialized (max: {} connections)",
        settings.database.max_connections.unwrap_or(10)
    );

    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache = AnalyticsCache::new(settings.cache.max_entries.unwrap_or(64), cache_ttl);

    info!("Analytics cache initialized (TTL: {}s)", cache_ttl);

    let options = EngineOptions {
        candidate_pool: settings.matching.candidate_pool,
        skill_demand_top: settings.matching.skill_demand_top,
        regional_top: settings.matching.regional_top,
    };

    let app_state = AppState {
        engine: MatchEngine::new(Arc::new(store), recommender, cache, options),
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
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
