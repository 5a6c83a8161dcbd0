// ABOUTME: Ingredient listing query parsing shared by the HTTP handlers
// ABOUTME: Turns raw query strings into a typed store filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use bakebase_core::errors::AppResult;
use bakebase_core::models::IngredientCategory;
use serde::Deserialize;

use crate::store::IngredientFilter;

/// Query parameters of `GET /ingredients`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListIngredientsQuery {
    /// Category wire name
    pub category: Option<String>,
    /// Substring of the primary function
    pub function: Option<String>,
}

impl ListIngredientsQuery {
    /// Parse into a store filter; blank parameters are ignored
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` listing the valid categories when `category` is unknown
    pub fn into_filter(self) -> AppResult<IngredientFilter> {
        let category = non_blank(self.category)
            .map(|value| value.parse::<IngredientCategory>())
            .transpose()?;
        Ok(IngredientFilter {
            category,
            function: non_blank(self.function),
        })
    }
}

/// Query parameters of `GET /ingredients/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Search text
    pub q: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
