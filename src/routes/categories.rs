// ABOUTME: Category route handler listing ingredient categories with counts
// ABOUTME: Each category includes up to five example ingredient names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use std::sync::Arc;

use axum::{extract::State, routing::get, Router};
use bakebase_core::errors::AppResult;

use super::server_failure;
use crate::resources::ServerResources;
use crate::response::{ApiResponse, Meta};
use crate::store::CategorySummary;

const CATEGORIES_DESCRIPTION: &str = "Returns all ingredient categories with counts and examples";
const CATEGORIES_GLOSSARY: &[(&str, &str)] = &[
    ("category", "Classification name (flour, egg, fat, sugar, leavener)"),
    ("count", "Number of ingredients in this category"),
    ("examples", "Sample ingredient names from this category"),
];

/// Category routes
pub struct CategoryRoutes;

impl CategoryRoutes {
    /// Create the category routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/categories", get(Self::handle_list))
            .with_state(resources)
    }

    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<ApiResponse<Vec<CategorySummary>>> {
        let categories = resources
            .store
            .category_summaries()
            .await
            .map_err(server_failure)?;

        Ok(ApiResponse::new(
            categories,
            Meta::with_glossary(CATEGORIES_DESCRIPTION, CATEGORIES_GLOSSARY),
        ))
    }
}
