// ABOUTME: Loads the bundled baking ingredient dataset into an ingredient store
// ABOUTME: Used by the server's auto-seed on an empty database and by the seed binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Ingredient Seeding
//!
//! The reference dataset ships inside the binary as `data/ingredients.json`.
//! Records carry no IDs; the store assigns one per insert.

use bakebase_core::errors::{AppError, AppResult};
use bakebase_core::models::IngredientRecord;
use tracing::info;

use crate::store::IngredientStore;

const INGREDIENTS_JSON: &str = include_str!("../data/ingredients.json");

/// Parse the bundled ingredient dataset
///
/// # Errors
///
/// Returns a serialization error if the bundled file is malformed
pub fn bundled_ingredients() -> AppResult<Vec<IngredientRecord>> {
    serde_json::from_str(INGREDIENTS_JSON).map_err(|e| {
        AppError::serialization(format!("Bundled ingredient dataset is invalid: {e}"))
    })
}

/// Insert every bundled ingredient, optionally clearing the store first
///
/// Returns the number of records inserted.
///
/// # Errors
///
/// Returns an error if the dataset cannot be parsed or a store write fails
pub async fn seed_ingredients(store: &dyn IngredientStore, replace: bool) -> AppResult<usize> {
    let records = bundled_ingredients()?;

    if replace {
        store.clear_ingredients().await?;
    }

    for record in &records {
        store.insert_ingredient(record).await?;
    }

    info!(count = records.len(), replace, "Seeded ingredient dataset");
    Ok(records.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bakebase_core::models::IngredientCategory;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_dataset_is_valid() {
        let records = bundled_ingredients().unwrap();
        assert!(records.len() >= 50);

        for record in &records {
            record.validate().unwrap();
        }

        let categories: HashSet<IngredientCategory> =
            records.iter().map(|record| record.category).collect();
        assert_eq!(categories.len(), 13);
    }
}
