// ABOUTME: Baking chemistry engine that predicts the outcome of ingredient combinations
// ABOUTME: Pure, synchronous analysis over resolved ingredient records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

#![deny(unsafe_code)]

//! # BakeBase Chemistry
//!
//! The combination analyzer takes `(ingredient id, grams)` pairs plus the
//! resolved ingredient records and derives aggregate composition, hydration,
//! leavening, pH environment, texture tags, a plain-language prediction, and
//! warnings.
//!
//! The analyzer performs no I/O and holds no state. Callers validate input
//! (non-empty list, positive quantities, resolvable ids) before invoking it.
//!
//! ```
//! use bakebase_chemistry::{analyze_combination, AnalyzerOptions, CombinationInput};
//! use bakebase_core::models::{IngredientCategory, IngredientRecord};
//!
//! let flour = IngredientRecord::new("f", "Bread Flour", IngredientCategory::Flour)
//!     .with_composition(11.4, 12.7, 1.5, 70.0, 0.3)
//!     .gluten_forming();
//! let water = IngredientRecord::new("w", "Water", IngredientCategory::Liquid)
//!     .with_composition(100.0, 0.0, 0.0, 0.0, 0.0);
//!
//! let inputs = [CombinationInput::new("f", 500.0), CombinationInput::new("w", 350.0)];
//! let analysis = analyze_combination(&inputs, &[flour, water], &AnalyzerOptions::default());
//! assert!((analysis.hydration_analysis.hydration_ratio_pct - 70.0).abs() < 1e-9);
//! ```

/// Analyzer thresholds grouped by concern
pub mod constants;

/// Entry point that aggregates a combination into a `CombinedAnalysis`
pub mod combination;

/// Flour/liquid classification and hydration banding
pub mod hydration;

/// Leavening presence, adequacy, and the opt-in excess check
pub mod leavening;

/// Input and output types of the analyzer
pub mod models;

/// Plain-language outcome narrative and warnings
pub mod prediction;

/// Protein summary, pH environment, and texture tags
pub mod texture;

pub use combination::analyze_combination;
pub use models::{
    AnalyzerOptions, CombinationInput, CombinedAnalysis, HydrationAnalysis, HydrationAssessment,
    IngredientUsage, LeaveningAdequacy, LeaveningAnalysis, PhEnvironment, PhRange,
};
