mod aggregate;
mod config;
mod errors;
mod gate;
mod models;
mod providers;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::gate::RequestGate;
use crate::providers::{
    adzuna::AdzunaProvider, reed::ReedProvider, usajobs::UsaJobsProvider, JobProvider,
};
use crate::routes::build_router;
use crate::state::AppState;

/// Outbound calls inherit this single transport-level timeout; no
/// per-provider timeout is configured.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobScout API v{}", env!("CARGO_PKG_VERSION"));

    // One shared HTTP client for all outbound provider calls
    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    // Providers in merge order; the combined search preserves this order
    let providers: Vec<Arc<dyn JobProvider>> = vec![
        Arc::new(AdzunaProvider::new(
            http.clone(),
            config.adzuna_app_id.clone(),
            config.adzuna_app_key.clone(),
        )),
        Arc::new(ReedProvider::new(http.clone(), config.reed_api_key.clone())),
        Arc::new(UsaJobsProvider::new(
            http,
            config.usajobs_api_key.clone(),
            config.usajobs_user_agent.clone(),
        )),
    ];
    for provider in &providers {
        info!(
            provider = provider.name(),
            configured = provider.configured(),
            "provider registered"
        );
    }

    let state = AppState {
        providers: Arc::new(providers),
        gate: Arc::new(RequestGate::new(
            gate::MAX_REQUESTS_PER_WINDOW,
            gate::WINDOW,
        )),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
