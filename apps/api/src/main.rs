mod assessment;
mod config;
mod db;
mod errors;
mod matching;
mod models;
mod routes;
mod state;
mod storage;
mod users;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::cache::MatchCache;
use crate::matching::CareerMatcher;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{AssessmentStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on unparseable env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize storage: PostgreSQL when configured, seeded memory store otherwise
    let store: Arc<dyn AssessmentStore> = match &config.database_url {
        Some(url) => Arc::new(PgStore::new(create_pool(url).await?)),
        None => {
            let (store, demo_user) = MemoryStore::demo().await?;
            warn!("DATABASE_URL not set, using in-memory store (demo user {demo_user})");
            Arc::new(store)
        }
    };

    // Initialize career matcher (weights were validated with the config)
    let options = config.match_options;
    let cache = MatchCache::new(config.match_cache_capacity, config.match_cache_ttl);
    let matcher = Arc::new(CareerMatcher::new(store.clone(), options, cache));
    info!(
        "Career matcher ready (top {}, weights riasec={} aptitude={} ocean={})",
        options.top_n, options.weights.riasec, options.weights.aptitude, options.weights.ocean
    );

    // Build app state
    let state = AppState {
        store,
        matcher,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
