// ABOUTME: Server binary for the BakeBase HTTP API
// ABOUTME: Loads configuration, opens and seeds the database, and serves all routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![recursion_limit = "256"]

//! # BakeBase API Server Binary
//!
//! Starts the BakeBase HTTP API with API key authentication, key
//! provisioning, and the combination analyzer.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use bakebase::{
    config::environment::ServerConfig, database::Database, logging, resources::ServerResources,
    routes::build_router, seed::seed_ingredients, store::IngredientStore,
};
use chrono::Utc;
use clap::Parser;
use tokio::{net::TcpListener, signal, time};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "bakebase-server")]
#[command(about = "BakeBase - AI-first food science reference API for baking ingredients")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.set_http_port(http_port);
    }

    info!("Starting BakeBase API");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url.to_connection_string()).await?;
    if config.database.auto_seed {
        seed_if_empty(&database).await?;
    }

    let addr = format!("{}:{}", config.host, config.http_port);
    let resources = Arc::new(ServerResources::new(database, config.clone()));
    spawn_limiter_purge(&resources, config.key_provisioning.window_secs);
    let app = build_router(resources);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {addr}");
    display_available_endpoints(&config);

    if let Err(e) = axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn seed_if_empty(database: &Database) -> Result<()> {
    let count = database.count_ingredients().await?;
    if count == 0 {
        let inserted = seed_ingredients(database, false).await?;
        info!("Seeded {inserted} ingredients into empty database");
    } else {
        info!("Database holds {count} ingredients; skipping seed");
    }
    Ok(())
}

/// Periodically drop elapsed rate limit windows so idle clients are forgotten
fn spawn_limiter_purge(resources: &Arc<ServerResources>, window_secs: u64) {
    let resources = Arc::clone(resources);
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_secs(window_secs));
        loop {
            interval.tick().await;
            resources.key_limiter.purge_expired(Utc::now());
        }
    });
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = config.public_base_url.trim_end_matches('/');

    info!("=== Available API Endpoints ===");
    info!("Discovery:");
    info!("   Service Index:     GET  {base}/");
    info!("   Agent Guide:       GET  {base}/agents");
    info!("   OpenAPI:           GET  {base}/docs/openapi.json");
    info!("   Agent Manifest:    GET  {base}/.well-known/agent-manifest.json");
    info!("   Health Check:      GET  {base}/health");
    info!("API Keys:");
    info!("   Key Dashboard:     GET  {base}/dashboard/keys");
    info!("   Create Key (HTML): POST {base}/dashboard/keys");
    info!("   Create Key (JSON): POST {base}/api/keys");
    info!("Ingredients (API key required):");
    info!("   List:              GET  {base}/ingredients");
    info!("   Get:               GET  {base}/ingredients/{{id}}");
    info!("   Search:            GET  {base}/ingredients/search?q={{query}}");
    info!("   Combine:           POST {base}/ingredients/combine");
    info!("   Categories:        GET  {base}/categories");
    info!("=== End of Endpoint List ===");
}
