//! CodeArena - Application Entry Point
//!
//! This is the main entry point for the CodeArena server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use codearena::{
    config::Config,
    db, handlers,
    judge::{ExecutionClient, JudgeEngine},
    services::GoogleTokenVerifier,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting CodeArena server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Wire up the judging pipeline against the external execution service
    let executor = ExecutionClient::new(&config.executor)?;
    let judge = JudgeEngine::new(Arc::new(executor));
    tracing::info!(url = %config.executor.url, "Execution service configured");

    // Federated login collaborator
    let google = GoogleTokenVerifier::new(&config.google)?;

    // Create application state
    let state = AppState::new(db_pool, judge, google, config.clone());

    // Build the router
    let app = Router::new()
        .nest("/api", handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start the server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
