// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Reports liveness with the service name and API version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Health check route for monitoring and load balancer probes

use axum::{routing::get, Json, Router};
use bakebase_core::constants::service;
use chrono::Utc;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check route
    pub fn routes() -> Router {
        Router::new().route("/health", get(Self::handle_health))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "timestamp": Utc::now().to_rfc3339(),
            "service": format!("{} API", service::NAME),
            "version": service::API_VERSION,
        }))
    }
}
