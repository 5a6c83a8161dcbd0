// ABOUTME: Ingredient record model with composition, chemistry, and functional flags
// ABOUTME: Closed enumerations for category, leavening type, unit, and confidence level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Ingredient classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Wheat and non-wheat flours
    Flour,
    /// Whole eggs, yolks, whites
    Egg,
    /// Butter, shortening, lard, solid fats
    Fat,
    /// Granulated, brown, and liquid sugars
    Sugar,
    /// Yeasts and chemical leaveners
    Leavener,
    /// Water, milk, and other primary liquids
    Liquid,
    /// Table and kosher salt
    Salt,
    /// Isolated starches
    Starch,
    /// Cocoa and chocolate
    Chocolate,
    /// Cultured and soft dairy
    Dairy,
    /// Flavor extracts
    Extract,
    /// Vinegars and citrus juices
    Acid,
    /// Ground spices
    Spice,
    /// Liquid oils
    Oil,
    /// Nuts and nut products
    Nut,
    /// Gums and gelling agents
    Thickener,
    /// Liquid syrups
    Syrup,
}

impl IngredientCategory {
    /// Every category, in display order
    pub const ALL: [Self; 17] = [
        Self::Flour,
        Self::Egg,
        Self::Fat,
        Self::Sugar,
        Self::Leavener,
        Self::Liquid,
        Self::Salt,
        Self::Starch,
        Self::Chocolate,
        Self::Dairy,
        Self::Extract,
        Self::Acid,
        Self::Spice,
        Self::Oil,
        Self::Nut,
        Self::Thickener,
        Self::Syrup,
    ];

    /// Wire name of the category
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flour => "flour",
            Self::Egg => "egg",
            Self::Fat => "fat",
            Self::Sugar => "sugar",
            Self::Leavener => "leavener",
            Self::Liquid => "liquid",
            Self::Salt => "salt",
            Self::Starch => "starch",
            Self::Chocolate => "chocolate",
            Self::Dairy => "dairy",
            Self::Extract => "extract",
            Self::Acid => "acid",
            Self::Spice => "spice",
            Self::Oil => "oil",
            Self::Nut => "nut",
            Self::Thickener => "thickener",
            Self::Syrup => "syrup",
        }
    }
}

impl Display for IngredientCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!("Unknown ingredient category: {s}"))
                    .with_details(serde_json::json!({
                        "valid_categories": Self::ALL.map(Self::as_str),
                    }))
            })
    }
}

/// Mechanism by which an ingredient produces gas for rise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveningType {
    /// Fermentation (yeast)
    Biological,
    /// Acid-base reaction (baking powder/soda)
    Chemical,
    /// Whipped-in air (eggs, cream)
    Mechanical,
    /// Water vaporization
    Steam,
}

impl LeaveningType {
    /// Wire name of the leavening type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biological => "biological",
            Self::Chemical => "chemical",
            Self::Mechanical => "mechanical",
            Self::Steam => "steam",
        }
    }
}

impl Display for LeaveningType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the ingredient is usually measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    /// Measured by weight
    Weight,
    /// Measured by volume
    Volume,
}

impl MeasurementUnit {
    /// Wire name of the unit
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Volume => "volume",
        }
    }
}

/// Data reliability of an ingredient record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Peer-reviewed sources such as USDA
    Verified,
    /// Baker consensus
    Community,
    /// Calculated estimates
    Inferred,
}

impl ConfidenceLevel {
    /// Wire name of the confidence level
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Community => "community",
            Self::Inferred => "inferred",
        }
    }
}

/// How an ingredient interacts with another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Other ingredient or ingredient class
    pub ingredient: String,
    /// Chemical or physical effect
    pub effect: String,
    /// Practical notes
    pub notes: String,
}

/// A substitute and its conversion ratio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// Substitute ingredient
    pub substitute: String,
    /// Conversion ratio, free text
    pub ratio: String,
    /// Practical notes
    pub notes: String,
}

/// A curated baking ingredient
///
/// Composition percentages are per-100g values measured independently, so
/// they are not required to sum to 100. `ph_level_min`/`ph_level_max` are
/// `None` where pH does not apply (pure fats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Opaque identifier; empty until the store assigns one
    #[serde(default)]
    pub id: String,
    /// Common name
    pub name: String,
    /// Classification
    pub category: IngredientCategory,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Water, % of mass
    pub water_content_pct: f64,
    /// Protein, % of mass
    pub protein_content_pct: f64,
    /// Fat, % of mass
    pub fat_content_pct: f64,
    /// Starch, % of mass
    pub starch_content_pct: f64,
    /// Sugar, % of mass
    pub sugar_content_pct: f64,
    /// Fiber, % of mass
    pub fiber_content_pct: f64,
    /// Lower pH bound
    pub ph_level_min: Option<f64>,
    /// Upper pH bound
    pub ph_level_max: Option<f64>,
    /// Density for volume conversions
    pub density_g_per_ml: Option<f64>,
    /// Usual measurement unit
    pub standard_measurement_unit: MeasurementUnit,
    /// Forms a gluten network when hydrated and worked
    pub gluten_forming: bool,
    /// Acts as an emulsifier
    pub emulsifying: bool,
    /// Leavening mechanism, if any
    pub leavening_type: Option<LeaveningType>,
    /// Attracts and holds water
    pub hygroscopic: bool,
    /// Liquid absorbed relative to own weight
    pub typical_hydration_ratio: Option<f64>,
    /// Flavor descriptors
    #[serde(default)]
    pub flavor_profile: Vec<String>,
    /// Main role in baking
    pub primary_function: String,
    /// Interactions with other ingredients
    #[serde(default)]
    pub interactions: Vec<Interaction>,
    /// Substitutes and ratios
    #[serde(default)]
    pub substitution_ratio: Vec<Substitution>,
    /// Behavior at key temperature thresholds
    #[serde(default)]
    pub temperature_sensitivity: String,
    /// Provenance
    #[serde(default)]
    pub source_notes: String,
    /// Data reliability
    pub confidence_level: ConfidenceLevel,
}

impl IngredientRecord {
    /// Create a record with zeroed composition and no functional flags
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: IngredientCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            water_content_pct: 0.0,
            protein_content_pct: 0.0,
            fat_content_pct: 0.0,
            starch_content_pct: 0.0,
            sugar_content_pct: 0.0,
            fiber_content_pct: 0.0,
            ph_level_min: None,
            ph_level_max: None,
            density_g_per_ml: None,
            standard_measurement_unit: MeasurementUnit::Weight,
            gluten_forming: false,
            emulsifying: false,
            leavening_type: None,
            hygroscopic: false,
            typical_hydration_ratio: None,
            flavor_profile: Vec::new(),
            primary_function: String::new(),
            interactions: Vec::new(),
            substitution_ratio: Vec::new(),
            temperature_sensitivity: String::new(),
            source_notes: String::new(),
            confidence_level: ConfidenceLevel::Inferred,
        }
    }

    /// Set water, protein, fat, starch, and sugar percentages
    #[must_use]
    pub fn with_composition(
        mut self,
        water: f64,
        protein: f64,
        fat: f64,
        starch: f64,
        sugar: f64,
    ) -> Self {
        self.water_content_pct = water;
        self.protein_content_pct = protein;
        self.fat_content_pct = fat;
        self.starch_content_pct = starch;
        self.sugar_content_pct = sugar;
        self
    }

    /// Set the pH range
    #[must_use]
    pub fn with_ph(mut self, min: f64, max: f64) -> Self {
        self.ph_level_min = Some(min);
        self.ph_level_max = Some(max);
        self
    }

    /// Mark the ingredient as gluten forming
    #[must_use]
    pub fn gluten_forming(mut self) -> Self {
        self.gluten_forming = true;
        self
    }

    /// Set the leavening mechanism
    #[must_use]
    pub fn with_leavening(mut self, leavening: LeaveningType) -> Self {
        self.leavening_type = Some(leavening);
        self
    }

    /// Check record invariants: non-empty name, percentages in `[0, 100]`,
    /// and `ph_level_min <= ph_level_max`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` describing the first violated invariant
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("Ingredient name must not be empty"));
        }

        let composition = [
            ("water_content_pct", self.water_content_pct),
            ("protein_content_pct", self.protein_content_pct),
            ("fat_content_pct", self.fat_content_pct),
            ("starch_content_pct", self.starch_content_pct),
            ("sugar_content_pct", self.sugar_content_pct),
            ("fiber_content_pct", self.fiber_content_pct),
        ];
        for (field, value) in composition {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(AppError::invalid_input(format!(
                    "{}: {field} must be between 0 and 100 (got {value})",
                    self.name
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.ph_level_min, self.ph_level_max) {
            if min > max {
                return Err(AppError::invalid_input(format!(
                    "{}: ph_level_min {min} exceeds ph_level_max {max}",
                    self.name
                )));
            }
        }

        Ok(())
    }
}
