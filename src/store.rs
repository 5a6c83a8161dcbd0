// ABOUTME: Ingredient store abstraction injected into request handlers
// ABOUTME: Defines list/search/lookup operations and category summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Ingredient store abstraction
//!
//! Handlers reach ingredient data only through [`IngredientStore`], handed to
//! them by `ServerResources`, so routes can be tested against any backing
//! implementation.

use async_trait::async_trait;
use bakebase_core::errors::AppResult;
use bakebase_core::models::{IngredientCategory, IngredientRecord};
use serde::{Deserialize, Serialize};

/// Optional filters for listing ingredients
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientFilter {
    /// Exact category match
    pub category: Option<IngredientCategory>,
    /// Case-insensitive substring of `primary_function`
    pub function: Option<String>,
}

/// Per-category count with example names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category
    pub category: IngredientCategory,
    /// Number of ingredients in the category
    pub count: usize,
    /// Up to five ingredient names
    pub examples: Vec<String>,
}

/// Read and write access to ingredient records
#[async_trait]
pub trait IngredientStore: Send + Sync {
    /// Ingredients matching `filter`, ordered by name
    async fn list_ingredients(
        &self,
        filter: &IngredientFilter,
    ) -> AppResult<Vec<IngredientRecord>>;

    /// A single ingredient by id
    async fn get_ingredient(&self, id: &str) -> AppResult<Option<IngredientRecord>>;

    /// Ingredients whose ids appear in `ids`; missing ids are omitted
    async fn get_ingredients_by_ids(&self, ids: &[String]) -> AppResult<Vec<IngredientRecord>>;

    /// Case-insensitive substring search over name, description, function, and category
    async fn search_ingredients(&self, query: &str) -> AppResult<Vec<IngredientRecord>>;

    /// Categories in first-seen order with counts and up to five examples
    async fn category_summaries(&self) -> AppResult<Vec<CategorySummary>>;

    /// Number of stored ingredients
    async fn count_ingredients(&self) -> AppResult<u64>;

    /// Store a record and return its id; an empty id is replaced by a fresh UUID
    async fn insert_ingredient(&self, record: &IngredientRecord) -> AppResult<String>;

    /// Remove every ingredient
    async fn clear_ingredients(&self) -> AppResult<()>;
}

/// Group records by category in first-seen order
///
/// Shared by store implementations that summarize in memory.
#[must_use]
pub fn summarize_categories(
    records: &[IngredientRecord],
    max_examples: usize,
) -> Vec<CategorySummary> {
    let mut summaries: Vec<CategorySummary> = Vec::new();
    for record in records {
        let position = summaries
            .iter()
            .position(|summary| summary.category == record.category);
        let summary = if let Some(index) = position {
            &mut summaries[index]
        } else {
            summaries.push(CategorySummary {
                category: record.category,
                count: 0,
                examples: Vec::new(),
            });
            let last = summaries.len() - 1;
            &mut summaries[last]
        };
        summary.count += 1;
        if summary.examples.len() < max_examples {
            summary.examples.push(record.name.clone());
        }
    }
    summaries
}
