//! Flowexport Server - NetFlow v9 relay.
//!
//! This server accepts typed flow records over HTTP, encodes them as NetFlow v9
//! export packets with flowexport-engine, and sends each packet as a UDP
//! datagram to a configured collector.

mod config;
mod error;
mod exporter;
mod handlers;
mod routes;

use crate::config::Config;
use crate::exporter::Exporter;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub exporter: Arc<Exporter>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flowexport_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Starting Flowexport Server on {}:{}", config.host, config.port);

    // Open the UDP side
    let exporter = Exporter::connect(&config.bind_addr, &config.collector_addr, config.source_id)
        .await?;

    // Build application state
    let state = AppState {
        exporter: Arc::new(exporter),
    };

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
