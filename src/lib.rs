// ABOUTME: Main library entry point for the BakeBase baking ingredient reference API
// ABOUTME: Exposes the HTTP server, ingredient store, key provisioning, and chemistry analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

// Crate-level attributes:
// - recursion_limit: Increased from default 128 to 256 for complex derive macros
//   (serde) on deeply nested types like analysis responses
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # BakeBase
//!
//! An AI-first food science reference API for baking ingredients. Agents
//! browse structured ingredient data and submit ingredient combinations to a
//! chemistry analyzer that predicts hydration, leavening, pH, texture, and
//! the likely baking outcome in plain language.
//!
//! ## Architecture
//!
//! - **Chemistry**: the pure combination analyzer (`bakebase-chemistry` crate)
//! - **Store**: the [`store::IngredientStore`] seam, backed by `SQLite`
//! - **Routes**: thin axum handlers wrapped in a self-describing envelope
//! - **Middleware**: API key authentication, provisioning rate limits, request IDs
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bakebase::config::environment::ServerConfig;
//! use bakebase::database::Database;
//! use bakebase::resources::ServerResources;
//! use bakebase::routes::build_router;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.url.to_connection_string()).await?;
//!     let resources = Arc::new(ServerResources::new(database, config));
//!     let _app = build_router(resources);
//!     Ok(())
//! }
//! ```

/// API key generation, hashing, and status checks
pub mod api_keys;

/// Environment-driven server configuration
pub mod config;

/// `SQLite` persistence for ingredients and API keys
pub mod database;

/// Agent guide, `OpenAPI` document, and agent manifest
pub mod discovery;

/// Structured logging setup and audit events
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Per-client fixed-window rate limiting
pub mod rate_limiting;

/// Shared server resources for dependency injection
pub mod resources;

/// Success envelope for JSON responses
pub mod response;

/// HTTP route handlers
pub mod routes;

/// Bundled ingredient dataset loading
pub mod seed;

/// Request validation and combination orchestration
pub mod services;

/// Ingredient store abstraction
pub mod store;

pub use bakebase_chemistry as chemistry;
pub use bakebase_core::{constants, errors, models};
