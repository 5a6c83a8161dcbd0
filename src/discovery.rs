// ABOUTME: Self-documentation served to AI agents: usage guide, OpenAPI, and agent manifest
// ABOUTME: Static documents are bundled at compile time and linked to the public base URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Discovery Documents
//!
//! The service describes itself in three formats: a plain-language agent
//! guide (`/agents`), an `OpenAPI` 3.0 document (`/docs/openapi.json`), and an
//! agent manifest (`/.well-known/agent-manifest.json`). The latter two are
//! bundled JSON; relative links inside them are resolved against
//! `PUBLIC_BASE_URL` when served.

use std::collections::BTreeMap;

use bakebase_core::constants::service;
use bakebase_core::errors::{AppError, AppResult};
use serde::Serialize;
use serde_json::{json, Value};

const OPENAPI_JSON: &str = include_str!("../data/openapi.json");
const AGENT_MANIFEST_JSON: &str = include_str!("../data/agent_manifest.json");

/// One entry of the agent guide's endpoint list
#[derive(Debug, Clone, Serialize)]
pub struct EndpointGuide {
    /// Method and path
    pub path: &'static str,
    /// HTTP method
    pub method: &'static str,
    /// What the endpoint does
    pub description: &'static str,
    /// When an agent should call it
    pub when_to_use: &'static str,
}

/// Plain-language usage guide for AI agents
#[derive(Debug, Clone, Serialize)]
pub struct AgentGuide {
    /// Service name
    pub api_name: &'static str,
    /// API version
    pub version: &'static str,
    /// What the API is for
    pub purpose: &'static str,
    /// How to get started
    pub recommended_usage: &'static str,
    /// Endpoints with usage hints
    pub available_endpoints: Vec<EndpointGuide>,
    /// Domain vocabulary
    pub key_concepts: BTreeMap<&'static str, &'static str>,
}

const fn endpoint(
    path: &'static str,
    method: &'static str,
    description: &'static str,
    when_to_use: &'static str,
) -> EndpointGuide {
    EndpointGuide {
        path,
        method,
        description,
        when_to_use,
    }
}

/// Build the agent usage guide
#[must_use]
pub fn agent_guide() -> AgentGuide {
    AgentGuide {
        api_name: service::NAME,
        version: service::API_VERSION,
        purpose: "AI-first food science reference API focused on the functional properties of baking ingredients. Provides structured, scientifically accurate data about ingredient chemistry, interactions, and predicted baking outcomes.",
        recommended_usage: "API key required for all data endpoints. Get a key at /dashboard/keys (no account needed). Send it as Authorization: Bearer <key> or X-API-Key header. Use BakeBase to understand ingredient functionality, calculate hydration ratios, predict texture outcomes, and analyze ingredient combinations before baking. The /combine endpoint is the most powerful feature - it performs real chemistry calculations and returns plain-language predictions suitable for AI agent interpretation.",
        available_endpoints: vec![
            endpoint(
                "GET /ingredients",
                "GET",
                "List all ingredients with optional filtering",
                "Browse available ingredients, filter by category (flour, egg, fat, sugar, leavener) or search by function (e.g., \"emulsifying\", \"leavening\")",
            ),
            endpoint(
                "GET /ingredients/:id",
                "GET",
                "Get detailed information about a specific ingredient",
                "Retrieve complete data including interactions, substitutions, and thermal properties for a single ingredient",
            ),
            endpoint(
                "GET /ingredients/search?q=",
                "GET",
                "Search ingredients by name or function",
                "Find ingredients when you have partial name or want to search by role (e.g., \"gluten\", \"tender\", \"brown\")",
            ),
            endpoint(
                "POST /ingredients/combine",
                "POST",
                "Analyze a combination of ingredients with real chemistry calculations",
                "Predict baking outcome before mixing. Provide array of {ingredient_id, quantity_g} and receive hydration analysis, leavening adequacy, pH environment, texture prediction, and plain-language outcome forecast. This is the primary value-add endpoint.",
            ),
            endpoint(
                "GET /categories",
                "GET",
                "List all ingredient categories with counts",
                "Understand available ingredient types and their distribution in the database",
            ),
            endpoint(
                "GET /dashboard/keys",
                "GET",
                "API key provisioning page",
                "Obtain an API key (no account required). Keys expire in 90 days. Required before calling /ingredients, /categories, or /combine.",
            ),
            endpoint(
                "POST /api/keys",
                "POST",
                "Programmatic API key provisioning",
                "Obtain an API key as JSON without the HTML page. Rate limited per client IP.",
            ),
            endpoint(
                "GET /health",
                "GET",
                "Health check endpoint",
                "Verify API availability",
            ),
            endpoint(
                "GET /agents",
                "GET",
                "This endpoint - returns agent usage guide",
                "First-time API discovery or when unsure how to use the API",
            ),
            endpoint(
                "GET /docs/openapi.json",
                "GET",
                "OpenAPI 3.0 specification",
                "Generate client code or integrate with API documentation tools",
            ),
        ],
        key_concepts: BTreeMap::from([
            ("authentication", "API key required. Get one at /dashboard/keys. Send as Authorization: Bearer <key> or X-API-Key header. No account required. Keys expire in 90 days."),
            ("hydration_ratio", "The ratio of liquid to flour by weight. 70% hydration means 70g water per 100g flour. Critical for predicting dough consistency."),
            ("gluten_forming", "Ingredients with proteins that form elastic networks when hydrated and mixed. Determines chewiness and structure."),
            ("leavening_type", "How an ingredient creates rise: biological (yeast), chemical (baking powder/soda), mechanical (whipped eggs), or steam (water in butter)."),
            ("typical_hydration_ratio", "How much liquid an ingredient absorbs relative to its weight. Used in hydration calculations."),
            ("interactions", "How ingredients affect each other chemically and physically (e.g., acid + baking soda = CO2, fat + flour = tenderness)."),
            ("substitution_ratio", "How to replace one ingredient with another, including quantity adjustments needed."),
            ("ph_level", "Acid/base balance. Affects leavening reactions, gluten strength, and browning rate."),
            ("confidence_level", "Data reliability: \"verified\" (peer-reviewed sources like USDA), \"community\" (baker consensus), or \"inferred\" (calculated estimates)."),
        ]),
    }
}

/// Service index served at `/`
#[must_use]
pub fn service_index() -> Value {
    json!({
        "service": service::NAME,
        "description": service::DESCRIPTION,
        "version": service::API_VERSION,
        "status": "healthy",
        "links": {
            "agents": "/agents",
            "ingredients": "/ingredients",
            "categories": "/categories",
            "combine": "/ingredients/combine",
            "docs": "/docs/openapi.json",
            "manifest": "/.well-known/agent-manifest.json",
            "health": "/health",
            "api_keys": "/dashboard/keys",
        },
        "meta": {
            "description": "BakeBase root. If you are an AI agent, start at /agents for usage guidance or /ingredients to browse the ingredient database.",
        },
    })
}

fn parse_bundled(name: &str, raw: &str) -> AppResult<Value> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::serialization(format!("Bundled {name} is not valid JSON: {e}")))
}

/// Resolve a root-relative link against `base_url`
#[must_use]
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{path}", base_url.trim_end_matches('/'))
    } else {
        path.to_owned()
    }
}

fn absolutize(document: &mut Value, pointer: &str, base_url: &str) {
    if let Some(slot) = document.pointer_mut(pointer) {
        if let Some(path) = slot.as_str() {
            *slot = Value::String(absolute_url(base_url, path));
        }
    }
}

/// `OpenAPI` 3.0 document with its server URL set to `base_url`
///
/// # Errors
///
/// Returns a serialization error if the bundled document is malformed
pub fn openapi_document(base_url: &str) -> AppResult<Value> {
    let mut document = parse_bundled("OpenAPI document", OPENAPI_JSON)?;
    if let Some(url) = document.pointer_mut("/servers/0/url") {
        *url = Value::String(base_url.trim_end_matches('/').to_owned());
    }
    Ok(document)
}

/// Agent manifest with its links resolved against `base_url`
///
/// # Errors
///
/// Returns a serialization error if the bundled manifest is malformed
pub fn agent_manifest(base_url: &str) -> AppResult<Value> {
    let mut manifest = parse_bundled("agent manifest", AGENT_MANIFEST_JSON)?;
    for pointer in [
        "/payment/checkout_url",
        "/payment/key_provisioning_url",
        "/reliability/status_url",
        "/homepage",
    ] {
        absolutize(&mut manifest, pointer, base_url);
    }
    Ok(manifest)
}
