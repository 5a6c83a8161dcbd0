// ABOUTME: Combination analyzer entry point aggregating ingredients into an analysis
// ABOUTME: Deterministic and side-effect free; unresolved ids are skipped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use std::collections::HashMap;

use bakebase_core::models::IngredientRecord;
use tracing::debug;

use crate::hydration::{analyze_hydration, counts_as_flour, liquid_contribution};
use crate::leavening::{analyze_leavening, LeaveningTally};
use crate::models::{
    AnalyzerOptions, CombinationInput, CombinedAnalysis, IngredientUsage, PhEnvironment,
};
use crate::prediction::{collect_warnings, predict};
use crate::texture::{protein_summary, texture_tags, PhEnvelope};

/// Aggregate view of a mix consumed by the texture and prediction rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixProfile {
    /// Sum of all requested grams
    pub total_weight_g: f64,
    /// Accumulated protein
    pub total_protein: f64,
    /// Accumulated fat
    pub total_fat: f64,
    /// Accumulated sugar
    pub total_sugar: f64,
    /// Grams of flour and gluten-forming ingredients
    pub flour_weight_g: f64,
    /// Liquid as a percentage of flour
    pub hydration_ratio_pct: f64,
    /// Leavening seen in the mix
    pub leavening: LeaveningTally,
    /// Acidity class of the pH envelope
    pub ph_environment: PhEnvironment,
}

#[derive(Debug, Default)]
struct Composition {
    water: f64,
    protein: f64,
    fat: f64,
    sugar: f64,
    starch: f64,
}

impl Composition {
    fn add(&mut self, record: &IngredientRecord, grams: f64) {
        let per_100g = grams / 100.0;
        self.water = record.water_content_pct.mul_add(per_100g, self.water);
        self.protein = record.protein_content_pct.mul_add(per_100g, self.protein);
        self.fat = record.fat_content_pct.mul_add(per_100g, self.fat);
        self.sugar = record.sugar_content_pct.mul_add(per_100g, self.sugar);
        self.starch = record.starch_content_pct.mul_add(per_100g, self.starch);
    }
}

/// Analyze a combination of ingredients and predict the baking outcome
///
/// `records` must contain the record for every input id; inputs whose id is
/// missing are left out of every aggregate except `total_weight_g`. Callers
/// reject empty lists and non-positive quantities beforehand.
#[must_use]
pub fn analyze_combination(
    inputs: &[CombinationInput],
    records: &[IngredientRecord],
    options: &AnalyzerOptions,
) -> CombinedAnalysis {
    let total_weight_g: f64 = inputs.iter().map(|input| input.quantity_g).sum();
    let by_id: HashMap<&str, &IngredientRecord> = records
        .iter()
        .map(|record| (record.id.as_str(), record))
        .collect();

    let mut composition = Composition::default();
    let mut envelope = PhEnvelope::default();
    let mut leavening = LeaveningTally::default();
    let mut flour_weight_g = 0.0;
    let mut liquid_weight_g = 0.0;
    let mut ingredients_used = Vec::with_capacity(inputs.len());

    for input in inputs {
        let Some(record) = by_id.get(input.ingredient_id.as_str()) else {
            continue;
        };
        let grams = input.quantity_g;

        composition.add(record, grams);
        envelope.observe(record);
        leavening.record(record, grams);
        if counts_as_flour(record) {
            flour_weight_g += grams;
        }
        liquid_weight_g += liquid_contribution(record, grams);

        ingredients_used.push(IngredientUsage {
            name: record.name.clone(),
            quantity_g: grams,
            percentage_of_total: share_of_total(grams, total_weight_g),
        });
    }

    let hydration_analysis = analyze_hydration(flour_weight_g, liquid_weight_g);
    let (leavening_analysis, excess) = analyze_leavening(&leavening, flour_weight_g, options);

    let mix = MixProfile {
        total_weight_g,
        total_protein: composition.protein,
        total_fat: composition.fat,
        total_sugar: composition.sugar,
        flour_weight_g,
        hydration_ratio_pct: hydration_analysis.hydration_ratio_pct,
        leavening,
        ph_environment: envelope.environment(),
    };

    let predicted_texture_profile = texture_tags(&mix);
    let prediction = predict(&mix, &predicted_texture_profile);
    let warnings = collect_warnings(&mix, &excess);

    debug!(
        ingredients = inputs.len(),
        resolved = ingredients_used.len(),
        total_weight_g,
        hydration_ratio_pct = mix.hydration_ratio_pct,
        "Analyzed ingredient combination"
    );

    CombinedAnalysis {
        total_weight_g,
        total_hydration_pct: composition.water,
        total_protein_pct: composition.protein,
        total_fat_pct: composition.fat,
        total_sugar_pct: composition.sugar,
        total_starch_pct: composition.starch,
        ph_range: envelope.range(),
        leavening_analysis,
        hydration_analysis,
        protein_interaction_summary: protein_summary(composition.protein).to_owned(),
        predicted_texture_profile,
        ph_environment: envelope.describe(),
        prediction,
        warnings,
        ingredients_used,
    }
}

fn share_of_total(grams: f64, total_weight_g: f64) -> f64 {
    if total_weight_g > 0.0 {
        grams * 100.0 / total_weight_g
    } else {
        0.0
    }
}
