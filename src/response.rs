// ABOUTME: Self-describing success envelope shared by every JSON data endpoint
// ABOUTME: Wraps payloads with an endpoint description and a field glossary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Response Envelope
//!
//! Every JSON data response has the shape
//! `{ success, data, meta: { endpoint_description, field_glossary } }` so an
//! agent can interpret a payload without consulting external documentation.
//! Failures use the matching `ErrorResponse` from `bakebase_core::errors`.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// What this endpoint returned
    pub endpoint_description: String,
    /// Field name to plain-language meaning
    pub field_glossary: Map<String, Value>,
}

impl Meta {
    /// Metadata with a description and no glossary entries
    #[must_use]
    pub fn new(endpoint_description: impl Into<String>) -> Self {
        Self {
            endpoint_description: endpoint_description.into(),
            field_glossary: Map::new(),
        }
    }

    /// Metadata with a description and glossary entries
    #[must_use]
    pub fn with_glossary(
        endpoint_description: impl Into<String>,
        glossary: &[(&str, &str)],
    ) -> Self {
        let field_glossary = glossary
            .iter()
            .map(|(field, meaning)| ((*field).to_owned(), Value::String((*meaning).to_owned())))
            .collect();
        Self {
            endpoint_description: endpoint_description.into(),
            field_glossary,
        }
    }
}

/// Successful API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Payload
    pub data: T,
    /// Self-describing metadata
    pub meta: Meta,
}

impl<T> ApiResponse<T> {
    /// Wrap `data` in a success envelope
    #[must_use]
    pub const fn new(data: T, meta: Meta) -> Self {
        Self {
            success: true,
            data,
            meta,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::new(
            vec!["bread flour"],
            Meta::with_glossary("Ingredient names", &[("name", "Common name")]),
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "bread flour");
        assert_eq!(json["meta"]["endpoint_description"], "Ingredient names");
        assert_eq!(json["meta"]["field_glossary"]["name"], "Common name");
    }
}
