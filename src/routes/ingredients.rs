// ABOUTME: Ingredient route handlers for listing, lookup, search, and combination analysis
// ABOUTME: Thin handlers that delegate to the store and the combination service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Ingredient routes
//!
//! Every handler here sits behind API key authentication. Responses carry a
//! field glossary so agents can read the payload without external docs.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use bakebase_chemistry::CombinedAnalysis;
use bakebase_core::errors::{AppError, AppResult};
use bakebase_core::models::IngredientRecord;

use super::server_failure;
use crate::resources::ServerResources;
use crate::response::{ApiResponse, Meta};
use crate::services::combination::{
    combine_ingredients, CombineRequest, COMBINE_ENDPOINT_DESCRIPTION,
};
use crate::services::ingredients::{ListIngredientsQuery, SearchQuery};

const LIST_DESCRIPTION: &str =
    "Returns a list of all baking ingredients with optional filtering by category or function";
const LIST_GLOSSARY: &[(&str, &str)] = &[
    ("id", "Unique identifier for the ingredient"),
    ("name", "Common name of the ingredient"),
    ("category", "Classification (flour, egg, fat, sugar, leavener)"),
    ("water_content_pct", "Water content as percentage of total weight"),
    ("protein_content_pct", "Protein content as percentage of total weight"),
    ("gluten_forming", "Boolean indicating if ingredient can form gluten networks"),
    (
        "leavening_type",
        "Type of leavening: biological, chemical, mechanical, steam, or null",
    ),
    (
        "typical_hydration_ratio",
        "How much liquid this ingredient absorbs relative to its weight",
    ),
    ("primary_function", "Main role this ingredient plays in baking"),
];

const DETAIL_DESCRIPTION: &str =
    "Returns complete data for a single ingredient including interactions and substitutions";
const DETAIL_NOT_FOUND_DESCRIPTION: &str = "Retrieves a single ingredient by its ID";
const DETAIL_GLOSSARY: &[(&str, &str)] = &[
    (
        "interactions",
        "Array of how this ingredient interacts with others chemically and physically",
    ),
    (
        "substitution_ratio",
        "Array of alternative ingredients and conversion ratios",
    ),
    (
        "temperature_sensitivity",
        "How this ingredient behaves at key temperature thresholds",
    ),
    ("source_notes", "Scientific sources and references for this data"),
    (
        "confidence_level",
        "Data reliability: verified (peer-reviewed), community, or inferred",
    ),
];

const SEARCH_MISSING_DESCRIPTION: &str = "Searches ingredients by name or function";
const SEARCH_GLOSSARY: &[(&str, &str)] = &[
    ("name", "Ingredient name"),
    ("category", "Classification"),
    ("primary_function", "Main role in baking"),
    ("description", "Detailed description"),
];

const COMBINE_DESCRIPTION: &str =
    "Chemistry analysis of combined ingredients with predicted baking outcome";
const COMBINE_GLOSSARY: &[(&str, &str)] = &[
    (
        "total_hydration_pct",
        "Total water content as percentage of combined weight",
    ),
    (
        "hydration_ratio_pct",
        "Ratio of liquid to flour weight (e.g., 70 means 70g water per 100g flour)",
    ),
    (
        "leavening_adequacy",
        "Assessment of whether enough leavening is present for the mass",
    ),
    (
        "protein_interaction_summary",
        "How proteins will behave and interact during baking",
    ),
    (
        "predicted_texture_profile",
        "Expected mouthfeel and structure characteristics",
    ),
    ("ph_environment", "Acid/base balance and its effects on the bake"),
    (
        "prediction",
        "Plain-language prediction of likely outcome for AI agent interpretation",
    ),
    ("warnings", "Potential issues or imbalances detected"),
];

/// Ingredient data routes
pub struct IngredientRoutes;

impl IngredientRoutes {
    /// Create all ingredient routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/ingredients", get(Self::handle_list))
            .route("/ingredients/search", get(Self::handle_search))
            .route("/ingredients/combine", post(Self::handle_combine))
            .route("/ingredients/:id", get(Self::handle_get))
            .with_state(resources)
    }

    /// Handle `GET /ingredients`
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListIngredientsQuery>,
    ) -> AppResult<ApiResponse<Vec<IngredientRecord>>> {
        let filter = query
            .into_filter()
            .map_err(|e| e.with_endpoint_description(LIST_DESCRIPTION))?;
        let ingredients = resources
            .store
            .list_ingredients(&filter)
            .await
            .map_err(server_failure)?;

        Ok(ApiResponse::new(
            ingredients,
            Meta::with_glossary(LIST_DESCRIPTION, LIST_GLOSSARY),
        ))
    }

    /// Handle `GET /ingredients/:id`
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> AppResult<ApiResponse<IngredientRecord>> {
        let ingredient = resources
            .store
            .get_ingredient(&id)
            .await
            .map_err(server_failure)?
            .ok_or_else(|| {
                AppError::not_found("Ingredient")
                    .with_endpoint_description(DETAIL_NOT_FOUND_DESCRIPTION)
            })?;

        Ok(ApiResponse::new(
            ingredient,
            Meta::with_glossary(DETAIL_DESCRIPTION, DETAIL_GLOSSARY),
        ))
    }

    /// Handle `GET /ingredients/search?q=`
    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<SearchQuery>,
    ) -> AppResult<ApiResponse<Vec<IngredientRecord>>> {
        let q = query
            .q
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or_else(|| {
                AppError::missing_field("Query parameter \"q\" is required")
                    .with_endpoint_description(SEARCH_MISSING_DESCRIPTION)
            })?;

        let ingredients = resources
            .store
            .search_ingredients(q)
            .await
            .map_err(server_failure)?;

        Ok(ApiResponse::new(
            ingredients,
            Meta::with_glossary(format!("Search results for \"{q}\""), SEARCH_GLOSSARY),
        ))
    }

    /// Handle `POST /ingredients/combine`
    async fn handle_combine(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<CombineRequest>, JsonRejection>,
    ) -> AppResult<ApiResponse<CombinedAnalysis>> {
        let Json(request) = payload.map_err(|rejection| {
            AppError::invalid_input(format!("Invalid input: {}", rejection.body_text()))
                .with_endpoint_description(COMBINE_ENDPOINT_DESCRIPTION)
        })?;

        let options = resources.config.analyzer.options();
        let analysis =
            combine_ingredients(resources.store.as_ref(), &request.ingredients, &options)
                .await
                .map_err(server_failure)?;

        Ok(ApiResponse::new(
            analysis,
            Meta::with_glossary(COMBINE_DESCRIPTION, COMBINE_GLOSSARY),
        ))
    }
}
