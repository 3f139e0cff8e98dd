//! Contract Auditor Server
//!
//! Hosts the smart-contract security auditor page. Each mounted page is a
//! session with its own controller; views post intents and read tab view
//! models. The audit itself is simulated.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    CONTRACT AUDITOR                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────────┐  ┌─────────────────────┐ │
//! │  │  API      │  │  Session      │  │  Audit Engine       │ │
//! │  │  (Axum)   │─▶│  Controllers  │─▶│  (mock, delayed)    │ │
//! │  └───────────┘  └───────┬───────┘  └─────────────────────┘ │
//! │                         ▼                                   │
//! │                ┌─────────────────┐                          │
//! │                │  Tab Views      │                          │
//! │                └─────────────────┘                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod controller;
mod error;
mod handlers;
mod logic;
mod models;
mod session;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

use logic::MockAuditEngine;
use session::SessionStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging (JSON lines in production)
    let json = config.is_production();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "contract_auditor=debug,tower_http=debug".into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    tracing::info!("Contract Auditor starting ({})...", config.environment);
    tracing::info!(
        "Audit delay: {}ms, session limit: {}, idle TTL: {}s",
        config.audit_delay_ms,
        config.max_sessions,
        config.session_ttl_secs
    );

    // Build application state
    let state = AppState::new(config.clone());

    // Reclaim pages whose client went away without unmounting
    session::spawn_sweeper(&state.sessions, config.sweep_period());

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Self {
        let engine = Arc::new(MockAuditEngine::new(config.audit_delay()));
        Self {
            sessions: Arc::new(SessionStore::new(
                engine,
                config.max_sessions,
                config.session_ttl(),
            )),
            config,
        }
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))

        // Page sessions
        .route("/api/v1/sessions", post(handlers::sessions::create))
        .route(
            "/api/v1/sessions/:id",
            get(handlers::sessions::get).delete(handlers::sessions::delete),
        )

        // Intents and views
        .route("/api/v1/sessions/:id/intents", post(handlers::intents::dispatch))
        .route("/api/v1/sessions/:id/tabs/:tab", get(handlers::tabs::get))
        .route("/api/v1/sessions/:id/notifications", get(handlers::notifications::drain))

        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
