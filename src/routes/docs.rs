// ABOUTME: Discovery route handlers for the service index, agent guide, and API documents
// ABOUTME: Serves /, /agents, /docs/openapi.json, and /.well-known/agent-manifest.json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use bakebase_core::errors::AppResult;
use serde_json::Value;

use crate::discovery::{self, AgentGuide};
use crate::resources::ServerResources;

/// Public discovery routes
pub struct DocsRoutes;

impl DocsRoutes {
    /// Create all discovery routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/agents", get(Self::handle_agent_guide))
            .route("/docs/openapi.json", get(Self::handle_openapi))
            .route(
                "/.well-known/agent-manifest.json",
                get(Self::handle_agent_manifest),
            )
            .with_state(resources)
    }

    async fn handle_index() -> Json<Value> {
        Json(discovery::service_index())
    }

    async fn handle_agent_guide() -> Json<AgentGuide> {
        Json(discovery::agent_guide())
    }

    async fn handle_openapi(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Value>> {
        discovery::openapi_document(&resources.config.public_base_url).map(Json)
    }

    async fn handle_agent_manifest(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<Value>> {
        discovery::agent_manifest(&resources.config.public_base_url).map(Json)
    }
}
