//! Query server for reverse geocoding.
//!
//! Exposes the region resolver over HTTP for the web application: single
//! point lookups, the active gazetteer, and batch address refresh.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use regiondex::config::Config;

mod handlers;
use handlers::{gazetteer_handler, health_handler, refresh_handler, reverse_handler, AppState};

#[derive(Parser, Debug)]
#[command(name = "query")]
#[command(about = "Reverse geocoding query server")]
struct Args {
    /// Listen address (overrides config)
    #[arg(short, long)]
    listen: Option<String>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in gazetteer: districts or provinces (overrides config)
    #[arg(long)]
    gazetteer: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let mut config = Config::load_or_default(args.config.as_ref())?;
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(gazetteer) = args.gazetteer {
        config.resolver.gazetteer = gazetteer;
    }

    let resolver = config.resolver().context("Invalid resolver configuration")?;

    info!("Regiondex Query Server");
    info!(
        "Using gazetteer '{}' with {} entries",
        resolver.gazetteer().name,
        resolver.gazetteer().len()
    );

    let state = Arc::new(AppState { resolver });

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/reverse", get(reverse_handler))
        .route("/v1/gazetteer", get(gazetteer_handler))
        .route("/v1/refresh", post(refresh_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", config.server.listen);

    let listener = tokio::net::TcpListener::bind(&config.server.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
