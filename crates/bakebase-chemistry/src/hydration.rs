// ABOUTME: Flour and liquid classification plus hydration ratio banding
// ABOUTME: Ratio is liquid water grams over flour grams, as a percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use bakebase_core::models::{IngredientCategory, IngredientRecord};

use crate::constants::{classification, hydration};
use crate::models::{HydrationAnalysis, HydrationAssessment};

/// Whether the record's full weight counts as flour
#[must_use]
pub fn counts_as_flour(record: &IngredientRecord) -> bool {
    record.category == IngredientCategory::Flour || record.gluten_forming
}

/// Grams of liquid water contributed by `grams` of the record
///
/// Only primary liquids (water content above 70%) contribute, and only their
/// water portion.
#[must_use]
pub fn liquid_contribution(record: &IngredientRecord, grams: f64) -> f64 {
    if record.water_content_pct > classification::LIQUID_WATER_PCT {
        grams * record.water_content_pct / 100.0
    } else {
        0.0
    }
}

/// Liquid as a percentage of flour, or 0 when there is no flour
#[must_use]
pub fn hydration_ratio(flour_weight_g: f64, liquid_weight_g: f64) -> f64 {
    if flour_weight_g > 0.0 {
        liquid_weight_g * 100.0 / flour_weight_g
    } else {
        0.0
    }
}

/// Band and explanation for a hydration ratio
#[must_use]
pub fn assess(ratio: f64) -> (HydrationAssessment, &'static str) {
    if ratio <= 0.0 {
        (
            HydrationAssessment::Dry,
            "No flour detected or no liquid added.",
        )
    } else if ratio < hydration::LOW {
        (
            HydrationAssessment::Dry,
            "Very low hydration, suitable for pie dough or shortbread.",
        )
    } else if ratio < hydration::NORMAL {
        (
            HydrationAssessment::Low,
            "Low hydration, suitable for bagels or stiff doughs.",
        )
    } else if ratio < hydration::HIGH {
        (
            HydrationAssessment::Normal,
            "Normal bread dough hydration, suitable for most yeasted breads.",
        )
    } else if ratio < hydration::VERY_HIGH {
        (
            HydrationAssessment::High,
            "High hydration, suitable for ciabatta, focaccia, or artisan breads.",
        )
    } else if ratio < hydration::BATTER {
        (
            HydrationAssessment::VeryHigh,
            "Very high hydration, creates wet dough or thick batter.",
        )
    } else {
        (
            HydrationAssessment::Batter,
            "Batter consistency, suitable for cakes, pancakes, or quick breads.",
        )
    }
}

/// Build the hydration section from accumulated flour and liquid grams
#[must_use]
pub fn analyze_hydration(flour_weight_g: f64, liquid_weight_g: f64) -> HydrationAnalysis {
    let hydration_ratio_pct = hydration_ratio(flour_weight_g, liquid_weight_g);
    let (assessment, notes) = assess(hydration_ratio_pct);
    HydrationAnalysis {
        flour_weight_g,
        liquid_weight_g,
        hydration_ratio_pct,
        assessment,
        notes: notes.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_inclusive_below() {
        assert_eq!(assess(0.0).0, HydrationAssessment::Dry);
        assert_eq!(assess(49.9).0, HydrationAssessment::Dry);
        assert_eq!(assess(50.0).0, HydrationAssessment::Low);
        assert_eq!(assess(60.0).0, HydrationAssessment::Normal);
        assert_eq!(assess(70.0).0, HydrationAssessment::High);
        assert_eq!(assess(100.0).0, HydrationAssessment::VeryHigh);
        assert_eq!(assess(150.0).0, HydrationAssessment::Batter);
        assert_eq!(assess(420.0).0, HydrationAssessment::Batter);
    }

    #[test]
    fn test_zero_ratio_has_its_own_note() {
        assert_eq!(assess(0.0).1, "No flour detected or no liquid added.");
        assert_ne!(assess(10.0).1, assess(0.0).1);
    }

    #[test]
    fn test_ratio_without_flour_is_zero() {
        assert!(hydration_ratio(0.0, 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_liquid_threshold_excludes_butter() {
        let butter = IngredientRecord::new("b", "Butter", IngredientCategory::Fat)
            .with_composition(16.0, 0.9, 81.0, 0.0, 0.1);
        let milk = IngredientRecord::new("m", "Whole Milk", IngredientCategory::Liquid)
            .with_composition(88.0, 3.3, 3.3, 0.0, 4.8);

        assert!(liquid_contribution(&butter, 100.0).abs() < f64::EPSILON);
        assert!((liquid_contribution(&milk, 100.0) - 88.0).abs() < 1e-9);
    }
}
