// ABOUTME: Route module organization for BakeBase HTTP endpoints
// ABOUTME: Assembles public, provisioning, and authenticated routers into one application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Route module for BakeBase
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the store and service layers. [`build_router`] applies the
//! shared middleware stack.

/// API key provisioning routes
pub mod api_keys;
/// Category listing routes
pub mod categories;
/// Service index, agent guide, and API documents
pub mod docs;
/// Health check route
pub mod health;
/// Ingredient data and combination analysis routes
pub mod ingredients;

use std::sync::Arc;

use axum::{middleware, Router};
use bakebase_core::errors::{AppError, ErrorCode};
use tower_http::trace::TraceLayer;

use crate::middleware::{propagate_request_id, require_api_key, setup_cors};
use crate::resources::ServerResources;

/// API key route handlers
pub use api_keys::ApiKeyRoutes;
/// Category route handlers
pub use categories::CategoryRoutes;
/// Discovery route handlers
pub use docs::DocsRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Ingredient route handlers
pub use ingredients::IngredientRoutes;

/// Replace the description of server-side failures with a generic one
pub(crate) fn server_failure(error: AppError) -> AppError {
    if error.http_status() >= 500 {
        error.with_endpoint_description("Error occurred")
    } else {
        error
    }
}

async fn handle_not_found() -> AppError {
    AppError::new(ErrorCode::ResourceNotFound, "Endpoint not found")
        .with_endpoint_description("The requested endpoint does not exist")
}

/// Build the complete application router
///
/// Ingredient and category routes require an API key; discovery, health, and
/// key provisioning are public.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let protected = Router::new()
        .merge(IngredientRoutes::routes(resources.clone()))
        .merge(CategoryRoutes::routes(resources.clone()))
        .route_layer(middleware::from_fn_with_state(
            resources.clone(),
            require_api_key,
        ));

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(DocsRoutes::routes(resources.clone()))
        .merge(ApiKeyRoutes::routes(resources))
        .merge(protected)
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
        .layer(middleware::from_fn(propagate_request_id))
}
