// ABOUTME: Integration tests for the combination analyzer over the bundled ingredient dataset
// ABOUTME: Covers reference bakes, hydration banding, warnings, and determinism properties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bakebase::chemistry::{
    analyze_combination, AnalyzerOptions, CombinationInput, CombinedAnalysis,
    HydrationAssessment, LeaveningAdequacy,
};
use bakebase::models::IngredientRecord;
use bakebase::seed::bundled_ingredients;

const TOLERANCE: f64 = 1e-9;

/// Bundled records keyed by their name so inputs can reference them directly
fn records() -> Vec<IngredientRecord> {
    bundled_ingredients()
        .unwrap()
        .into_iter()
        .map(|mut record| {
            record.id.clone_from(&record.name);
            record
        })
        .collect()
}

fn analyze(inputs: &[(&str, f64)]) -> CombinedAnalysis {
    analyze_with(inputs, &AnalyzerOptions::default())
}

fn analyze_with(inputs: &[(&str, f64)], options: &AnalyzerOptions) -> CombinedAnalysis {
    let inputs: Vec<CombinationInput> = inputs
        .iter()
        .map(|(name, grams)| CombinationInput::new(*name, *grams))
        .collect();
    analyze_combination(&inputs, &records(), options)
}

fn has_warning(analysis: &CombinedAnalysis, prefix: &str) -> bool {
    analysis.warnings.iter().any(|warning| warning.starts_with(prefix))
}

// ============================================================================
// Reference bakes
// ============================================================================

#[test]
fn test_lean_bread_dough() {
    let analysis = analyze(&[
        ("Bread Flour", 500.0),
        ("Water", 350.0),
        ("Instant Yeast", 10.0),
        ("Table Salt", 10.0),
    ]);

    assert!((analysis.total_weight_g - 870.0).abs() < TOLERANCE);
    let hydration = &analysis.hydration_analysis;
    assert!((hydration.flour_weight_g - 500.0).abs() < TOLERANCE);
    assert!((hydration.liquid_weight_g - 350.0).abs() < TOLERANCE);
    assert!((hydration.hydration_ratio_pct - 70.0).abs() < TOLERANCE);
    assert_eq!(hydration.assessment, HydrationAssessment::High);

    let leavening = &analysis.leavening_analysis;
    assert!(leavening.biological_present);
    assert!(!leavening.chemical_present);
    assert_eq!(leavening.adequacy, LeaveningAdequacy::Adequate);

    assert!(analysis.prediction.starts_with("This is a workable dough (70% hydration)."));
    assert!(analysis.prediction.contains("With yeast present"));
    assert!(analysis.predicted_texture_profile.contains(&"airy".to_owned()));
    assert!(analysis.warnings.is_empty());
}

#[test]
fn test_half_percent_ratio_rounds_up_in_prediction() {
    let analysis = analyze(&[
        ("Bread Flour", 400.0),
        ("Water", 250.0),
        ("Instant Yeast", 8.0),
    ]);

    assert!((analysis.hydration_analysis.hydration_ratio_pct - 62.5).abs() < TOLERANCE);
    assert!(analysis
        .prediction
        .starts_with("This is a workable dough (63% hydration)."));
}

#[test]
fn test_dry_sweet_mix_without_liquid() {
    let analysis = analyze(&[
        ("Cake Flour", 200.0),
        ("Granulated White Sugar", 200.0),
        ("Baking Powder", 2.0),
    ]);

    let hydration = &analysis.hydration_analysis;
    assert!((hydration.flour_weight_g - 200.0).abs() < TOLERANCE);
    assert!(hydration.liquid_weight_g.abs() < TOLERANCE);
    assert!(hydration.hydration_ratio_pct.abs() < TOLERANCE);
    assert_eq!(hydration.assessment, HydrationAssessment::Dry);

    assert!(has_warning(&analysis, "Very low hydration"));
    assert!(has_warning(&analysis, "Very high sugar content"));
    assert!(analysis.leavening_analysis.chemical_present);
}

#[test]
fn test_unleavened_flour_warning_needs_more_than_200g() {
    let small = analyze(&[("All-Purpose Flour", 100.0)]);
    assert!(!has_warning(&small, "No leavening agent detected"));
    assert!(has_warning(&small, "Very low hydration"));

    let large = analyze(&[("All-Purpose Flour", 300.0)]);
    assert!(has_warning(&large, "No leavening agent detected"));
    assert_eq!(
        large.predicted_texture_profile.last().map(String::as_str),
        Some("dense")
    );
    assert!(large.prediction.contains("CRITICAL"));
}

#[test]
fn test_flourless_mix() {
    let analysis = analyze(&[("Whole Egg", 200.0), ("Dark Chocolate", 150.0)]);

    assert!(analysis.hydration_analysis.flour_weight_g.abs() < TOLERANCE);
    assert!(analysis.hydration_analysis.hydration_ratio_pct.abs() < TOLERANCE);
    assert!(analysis
        .prediction
        .starts_with("This mixture contains no flour"));
    assert!(analysis.leavening_analysis.mechanical_present);
}

// ============================================================================
// Aggregation semantics
// ============================================================================

#[test]
fn test_component_totals_accumulate_grams() {
    let analysis = analyze(&[("Bread Flour", 200.0), ("Unsalted Butter", 100.0)]);

    // 12.6% of 200g plus 0.9% of 100g
    assert!((analysis.total_protein_pct - 26.1).abs() < 1e-6);
    // 1.7% of 200g plus 81.1% of 100g
    assert!((analysis.total_fat_pct - 84.5).abs() < 1e-6);
    // Butter's 15.9% water stays below the liquid threshold
    assert!(analysis.hydration_analysis.liquid_weight_g.abs() < TOLERANCE);
}

#[test]
fn test_ph_envelope_defaults_to_neutral() {
    let analysis = analyze(&[("Shortening", 100.0)]);
    assert!((analysis.ph_range.min - 7.0).abs() < TOLERANCE);
    assert!((analysis.ph_range.max - 7.0).abs() < TOLERANCE);

    let acidic = analyze(&[("Buttermilk", 100.0), ("Lemon Juice", 20.0)]);
    assert!((acidic.ph_range.min - 2.0).abs() < TOLERANCE);
    assert!((acidic.ph_range.max - 4.8).abs() < TOLERANCE);
    assert!(acidic.ph_environment.contains("(acidic)"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_usage_percentages_sum_to_100() {
    let analysis = analyze(&[
        ("All-Purpose Flour", 250.0),
        ("Whole Milk", 180.0),
        ("Whole Egg", 50.0),
        ("Granulated White Sugar", 30.0),
        ("Baking Powder", 7.5),
    ]);

    let sum: f64 = analysis
        .ingredients_used
        .iter()
        .map(|usage| usage.percentage_of_total)
        .sum();
    assert!((sum - 100.0).abs() < 1e-6);

    let names: Vec<&str> = analysis
        .ingredients_used
        .iter()
        .map(|usage| usage.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "All-Purpose Flour",
            "Whole Milk",
            "Whole Egg",
            "Granulated White Sugar",
            "Baking Powder"
        ]
    );
}

#[test]
fn test_ratio_is_zero_without_flour() {
    let analysis = analyze(&[("Water", 500.0), ("Honey", 50.0)]);
    assert!(analysis.hydration_analysis.liquid_weight_g > 0.0);
    assert!(analysis.hydration_analysis.hydration_ratio_pct.abs() < TOLERANCE);
}

#[test]
fn test_adding_leavener_only_sets_flags() {
    let base = [("All-Purpose Flour", 200.0), ("Whole Egg", 100.0)];
    let before = analyze(&base);
    assert!(before.leavening_analysis.mechanical_present);
    assert!(!before.leavening_analysis.chemical_present);

    let after = analyze(&[
        ("All-Purpose Flour", 200.0),
        ("Whole Egg", 100.0),
        ("Baking Soda", 3.0),
    ]);
    assert!(after.leavening_analysis.mechanical_present);
    assert!(after.leavening_analysis.chemical_present);
    assert!(!after.leavening_analysis.biological_present);
}

#[test]
fn test_analysis_is_deterministic() {
    let inputs = [
        ("Bread Flour", 400.0),
        ("Water", 280.0),
        ("Unsalted Butter", 40.0),
        ("Granulated White Sugar", 25.0),
        ("Active Dry Yeast", 7.0),
    ];

    let first = analyze(&inputs);
    let second = analyze(&inputs);
    assert_eq!(first, second);
    assert_eq!(
        first.predicted_texture_profile,
        second.predicted_texture_profile
    );
}

#[test]
fn test_aggregates_ignore_input_order() {
    let forward = analyze(&[("Bread Flour", 300.0), ("Whole Milk", 200.0), ("Honey", 30.0)]);
    let reversed = analyze(&[("Honey", 30.0), ("Whole Milk", 200.0), ("Bread Flour", 300.0)]);

    assert!((forward.total_sugar_pct - reversed.total_sugar_pct).abs() < 1e-9);
    assert!(
        (forward.hydration_analysis.hydration_ratio_pct
            - reversed.hydration_analysis.hydration_ratio_pct)
            .abs()
            < 1e-9
    );
    assert_eq!(
        forward.predicted_texture_profile,
        reversed.predicted_texture_profile
    );
    assert_eq!(forward.warnings, reversed.warnings);
}

// ============================================================================
// Opt-in excess leavening detection
// ============================================================================

#[test]
fn test_excess_chemical_leavening_is_opt_in() {
    let inputs = [("All-Purpose Flour", 200.0), ("Water", 150.0), ("Baking Powder", 30.0)];

    let default = analyze(&inputs);
    assert_eq!(
        default.leavening_analysis.adequacy,
        LeaveningAdequacy::Adequate
    );

    let options = AnalyzerOptions {
        detect_excess_leavening: true,
    };
    let strict = analyze_with(&inputs, &options);
    assert_eq!(
        strict.leavening_analysis.adequacy,
        LeaveningAdequacy::Excessive
    );
}
