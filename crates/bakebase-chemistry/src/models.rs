// ABOUTME: Input and output types of the combination analyzer
// ABOUTME: Serialized with the snake_case wire names used by the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// One requested ingredient and its quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationInput {
    /// Identifier of the ingredient record
    pub ingredient_id: String,
    /// Quantity in grams, positive
    pub quantity_g: f64,
}

impl CombinationInput {
    /// Create an input pair
    #[must_use]
    pub fn new(ingredient_id: impl Into<String>, quantity_g: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity_g,
        }
    }
}

/// Analyzer switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    /// Flag chemical leavening above 6% or yeast above 4% of flour weight as excessive
    pub detect_excess_leavening: bool,
}

/// Lowest and highest pH bound across the mix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhRange {
    /// Lowest `ph_level_min`, or 7.0 when absent
    pub min: f64,
    /// Highest `ph_level_max`, or 7.0 when absent
    pub max: f64,
}

/// Overall leavening verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveningAdequacy {
    /// No leavening ingredient present
    None,
    /// At least one leavening ingredient present
    Adequate,
    /// Leavener-to-flour ratio above the excess limit (opt-in)
    Excessive,
}

/// Leavening presence and verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveningAnalysis {
    /// Yeast present
    pub biological_present: bool,
    /// Baking powder or soda present
    pub chemical_present: bool,
    /// Whipped eggs, cream, or steam-producing ingredients present
    pub mechanical_present: bool,
    /// Overall verdict
    pub adequacy: LeaveningAdequacy,
    /// Plain-language explanation
    pub notes: String,
}

/// Hydration band of the mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrationAssessment {
    /// No liquid, no flour, or under 50%
    Dry,
    /// 50% to 60%
    Low,
    /// 60% to 70%
    Normal,
    /// 70% to 100%
    High,
    /// 100% to 150%
    VeryHigh,
    /// 150% and above
    Batter,
}

impl HydrationAssessment {
    /// Wire name of the band
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::VeryHigh => "very_high",
            Self::Batter => "batter",
        }
    }
}

impl Display for HydrationAssessment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flour/liquid balance of the mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationAnalysis {
    /// Grams of flour and gluten-forming ingredients
    pub flour_weight_g: f64,
    /// Grams of water contributed by primary liquids
    pub liquid_weight_g: f64,
    /// Liquid as a percentage of flour; 0 without flour
    pub hydration_ratio_pct: f64,
    /// Band of the ratio
    pub assessment: HydrationAssessment,
    /// Plain-language explanation
    pub notes: String,
}

/// Acidity class of the mix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhEnvironment {
    /// Midpoint below 5.5
    Acidic,
    /// Midpoint between 5.5 and 7.5, or no pH data
    Neutral,
    /// Midpoint above 7.5
    Alkaline,
}

impl PhEnvironment {
    /// Wire name of the class
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acidic => "acidic",
            Self::Neutral => "neutral",
            Self::Alkaline => "alkaline",
        }
    }
}

impl Display for PhEnvironment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved ingredient's share of the mix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientUsage {
    /// Ingredient name
    pub name: String,
    /// Grams requested
    pub quantity_g: f64,
    /// Share of the total weight, 0 to 100
    pub percentage_of_total: f64,
}

/// Result of analyzing an ingredient combination
///
/// The `total_*_pct` fields hold each component's per-100g percentage scaled
/// by the ingredient's grams and summed across the mix, which makes them
/// grams of that component rather than fractions of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedAnalysis {
    /// Sum of all requested grams
    pub total_weight_g: f64,
    /// Accumulated water
    pub total_hydration_pct: f64,
    /// Accumulated protein
    pub total_protein_pct: f64,
    /// Accumulated fat
    pub total_fat_pct: f64,
    /// Accumulated sugar
    pub total_sugar_pct: f64,
    /// Accumulated starch
    pub total_starch_pct: f64,
    /// pH envelope
    pub ph_range: PhRange,
    /// Leavening presence and verdict
    pub leavening_analysis: LeaveningAnalysis,
    /// Flour/liquid balance
    pub hydration_analysis: HydrationAnalysis,
    /// Protein band description
    pub protein_interaction_summary: String,
    /// Texture tags in rule order
    pub predicted_texture_profile: Vec<String>,
    /// pH envelope description
    pub ph_environment: String,
    /// Plain-language outcome
    pub prediction: String,
    /// Cautions about the mix
    pub warnings: Vec<String>,
    /// Resolved ingredients in input order
    pub ingredients_used: Vec<IngredientUsage>,
}
