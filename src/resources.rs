// ABOUTME: Centralized resource container for dependency injection into handlers
// ABOUTME: Holds the ingredient store, database, key manager, limiter, and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Server Resources
//!
//! Shared state handed to every router as `Arc<ServerResources>`. Handlers
//! reach ingredient data through the [`IngredientStore`] trait object rather
//! than a global client.

use std::sync::Arc;

use crate::api_keys::ApiKeyManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::rate_limiting::KeyProvisioningLimiter;
use crate::store::IngredientStore;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Ingredient lookups used by the ingredient and category routes
    pub store: Arc<dyn IngredientStore>,
    /// API key storage
    pub database: Arc<Database>,
    /// Key generation and lifecycle policy
    pub api_key_manager: Arc<ApiKeyManager>,
    /// Per-IP limiter for key provisioning
    pub key_limiter: Arc<KeyProvisioningLimiter>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Build resources backed by `database` for both ingredients and API keys
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let database = Arc::new(database);
        let store: Arc<dyn IngredientStore> = database.clone();
        Self::with_store(store, database, config)
    }

    /// Build resources with a separate ingredient store
    #[must_use]
    pub fn with_store(
        store: Arc<dyn IngredientStore>,
        database: Arc<Database>,
        config: ServerConfig,
    ) -> Self {
        let api_key_manager = ApiKeyManager::new(config.api_keys.expiry_days);
        let key_limiter = KeyProvisioningLimiter::new(
            config.key_provisioning.max_requests,
            config.key_provisioning.window_secs,
        );
        Self {
            store,
            database,
            api_key_manager: Arc::new(api_key_manager),
            key_limiter: Arc::new(key_limiter),
            config: Arc::new(config),
        }
    }
}
