// ABOUTME: Combination service that validates requests and resolves ingredient ids
// ABOUTME: Rejects malformed input before handing resolved records to the analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! # Combination Service
//!
//! The analyzer assumes validated input. This layer enforces that contract:
//! a non-empty list of at most ten ingredients, finite positive quantities,
//! and ids that all resolve in the store.

use std::collections::HashSet;

use bakebase_chemistry::{analyze_combination, AnalyzerOptions, CombinationInput, CombinedAnalysis};
use bakebase_core::constants::limits::MAX_COMBINATION_INGREDIENTS;
use bakebase_core::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::IngredientStore;

/// Description used for every rejected combine request
pub const COMBINE_ENDPOINT_DESCRIPTION: &str =
    "Combines multiple ingredients and performs chemistry analysis";

/// Body of `POST /ingredients/combine`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineRequest {
    /// Ingredients and quantities to combine
    pub ingredients: Vec<CombinationInput>,
}

fn invalid(reason: &str) -> AppError {
    AppError::invalid_input(format!("Invalid input: {reason}"))
        .with_endpoint_description(COMBINE_ENDPOINT_DESCRIPTION)
}

/// Check list length and quantities
///
/// # Errors
///
/// Returns `INVALID_INPUT` for an empty list, more than ten ingredients, an
/// empty id, or a quantity that is not a finite positive number
pub fn validate_combination(inputs: &[CombinationInput]) -> AppResult<()> {
    if inputs.is_empty() {
        return Err(invalid("ingredients must contain at least 1 item"));
    }
    if inputs.len() > MAX_COMBINATION_INGREDIENTS {
        return Err(invalid(&format!(
            "ingredients must contain at most {MAX_COMBINATION_INGREDIENTS} items"
        )));
    }
    for (index, input) in inputs.iter().enumerate() {
        if input.ingredient_id.trim().is_empty() {
            return Err(invalid(&format!(
                "ingredients[{index}].ingredient_id must not be empty"
            )));
        }
        if !input.quantity_g.is_finite() || input.quantity_g <= 0.0 {
            return Err(invalid(&format!(
                "ingredients[{index}].quantity_g must be a positive number"
            )));
        }
    }
    Ok(())
}

/// Distinct ingredient ids in first-seen order
#[must_use]
pub fn distinct_ids(inputs: &[CombinationInput]) -> Vec<String> {
    let mut seen = HashSet::new();
    inputs
        .iter()
        .filter(|input| seen.insert(input.ingredient_id.as_str()))
        .map(|input| input.ingredient_id.clone())
        .collect()
}

/// Validate, resolve, and analyze a combination
///
/// # Errors
///
/// Returns `INVALID_INPUT` for malformed input, `RESOURCE_NOT_FOUND` when any
/// id does not resolve, and store errors unchanged
pub async fn combine_ingredients(
    store: &dyn IngredientStore,
    inputs: &[CombinationInput],
    options: &AnalyzerOptions,
) -> AppResult<CombinedAnalysis> {
    validate_combination(inputs)?;

    let ids = distinct_ids(inputs);
    let records = store.get_ingredients_by_ids(&ids).await?;
    if records.len() != ids.len() {
        debug!(
            requested = ids.len(),
            resolved = records.len(),
            "Combination references unknown ingredients"
        );
        return Err(AppError::new(
            ErrorCode::ResourceNotFound,
            "One or more ingredient IDs not found",
        )
        .with_endpoint_description(COMBINE_ENDPOINT_DESCRIPTION));
    }

    Ok(analyze_combination(inputs, &records, options))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_quantities() {
        let zero = [CombinationInput::new("a", 0.0)];
        let nan = [CombinationInput::new("a", f64::NAN)];
        let ok = [CombinationInput::new("a", 12.5)];

        assert_eq!(validate_combination(&zero).unwrap_err().code, ErrorCode::InvalidInput);
        assert!(validate_combination(&nan).is_err());
        assert!(validate_combination(&ok).is_ok());
    }

    #[test]
    fn test_validate_list_bounds() {
        assert!(validate_combination(&[]).is_err());

        let eleven: Vec<_> = (0..11)
            .map(|i| CombinationInput::new(format!("id-{i}"), 10.0))
            .collect();
        let error = validate_combination(&eleven).unwrap_err();
        assert!(error.message.contains("at most 10"));
        assert_eq!(error.envelope_description(), COMBINE_ENDPOINT_DESCRIPTION);
    }

    #[test]
    fn test_distinct_ids_keeps_first_seen_order() {
        let inputs = [
            CombinationInput::new("b", 1.0),
            CombinationInput::new("a", 1.0),
            CombinationInput::new("b", 2.0),
        ];
        assert_eq!(distinct_ids(&inputs), vec!["b".to_owned(), "a".to_owned()]);
    }
}
