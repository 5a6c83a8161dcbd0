// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides seeded in-memory databases, server resources, and provisioned API keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `bakebase`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::{Arc, Once};

use anyhow::{anyhow, Result};
use axum::Router;
use bakebase::{
    api_keys::ApiKeyManager,
    config::ServerConfig,
    database::Database,
    models::ApiKey,
    resources::ServerResources,
    routes::build_router,
    seed::seed_ingredients,
    store::{IngredientFilter, IngredientStore},
};
use chrono::{Duration, Utc};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Empty in-memory database with migrations applied
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Ok(Database::new("sqlite::memory:").await?)
}

/// In-memory database holding the bundled ingredient dataset
pub async fn create_seeded_database() -> Result<Database> {
    let database = create_test_database().await?;
    seed_ingredients(&database, false).await?;
    Ok(database)
}

/// Server configuration suitable for tests
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.public_base_url = "http://bakebase.test".to_owned();
    config
}

/// Seeded resources with the default test configuration
pub async fn create_test_resources() -> Result<Arc<ServerResources>> {
    create_test_resources_with_config(test_config()).await
}

/// Seeded resources with a custom configuration
pub async fn create_test_resources_with_config(
    config: ServerConfig,
) -> Result<Arc<ServerResources>> {
    let database = create_seeded_database().await?;
    Ok(Arc::new(ServerResources::new(database, config)))
}

/// Full application router over `resources`
pub fn create_test_app(resources: &Arc<ServerResources>) -> Router {
    build_router(resources.clone())
}

/// Store a fresh key and return the stored record with the raw key
pub async fn provision_test_key(resources: &ServerResources) -> Result<(ApiKey, String)> {
    let (api_key, raw_key) = resources.api_key_manager.create_api_key(Utc::now());
    resources.database.create_api_key(&api_key).await?;
    Ok((api_key, raw_key))
}

/// Store a key that expired a day ago
pub async fn provision_expired_key(database: &Database) -> Result<String> {
    let manager = ApiKeyManager::new(1);
    let (api_key, raw_key) = manager.create_api_key(Utc::now() - Duration::days(2));
    database.create_api_key(&api_key).await?;
    Ok(raw_key)
}

/// Look up a seeded ingredient's generated ID by its exact name
pub async fn ingredient_id(store: &dyn IngredientStore, name: &str) -> Result<String> {
    store
        .list_ingredients(&IngredientFilter::default())
        .await?
        .into_iter()
        .find(|record| record.name == name)
        .map(|record| record.id)
        .ok_or_else(|| anyhow!("ingredient {name} not seeded"))
}
