// ABOUTME: Baking thresholds used by the combination analyzer
// ABOUTME: Hydration bands, composition cut-offs, pH bounds, and warning limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

//! Baking thresholds
//!
//! Composition values are the accumulated per-100g contributions produced by
//! the analyzer (grams of the component across the whole mix), so thresholds
//! such as `RICH_FAT` compare against grams, not fractions of the mix.

/// Ingredient classification cut-offs
pub mod classification {
    /// An ingredient above this water percentage counts as a primary liquid
    pub const LIQUID_WATER_PCT: f64 = 70.0;
    /// Neutral pH reported when no ingredient supplies pH data
    pub const NEUTRAL_PH: f64 = 7.0;
}

/// Hydration ratio bands (liquid grams / flour grams, as a percentage)
///
/// Lower bounds are inclusive.
pub mod hydration {
    /// Below this the dough is dry (pie dough, shortbread)
    pub const LOW: f64 = 50.0;
    /// Below this the dough is low hydration (bagels, stiff doughs)
    pub const NORMAL: f64 = 60.0;
    /// Below this the dough is a standard bread dough
    pub const HIGH: f64 = 70.0;
    /// Below this the dough is high hydration (ciabatta, focaccia)
    pub const VERY_HIGH: f64 = 100.0;
    /// At or above this the mix is a batter
    pub const BATTER: f64 = 150.0;
}

/// Protein summary bands
pub mod protein {
    /// Below this: very low protein
    pub const LOW: f64 = 5.0;
    /// Below this: low protein
    pub const MODERATE: f64 = 10.0;
    /// Below this: moderate protein, otherwise high
    pub const HIGH: f64 = 13.0;
}

/// Texture tag thresholds
pub mod texture {
    /// Fat above this tags the mix "rich"
    pub const RICH_FAT: f64 = 15.0;
    /// Fat above this also tags the mix "tender"
    pub const TENDER_FAT: f64 = 25.0;
    /// Protein above this (with flour) tags the mix "chewy"
    pub const CHEWY_PROTEIN: f64 = 12.0;
    /// Protein below this tags the mix "delicate"
    pub const DELICATE_PROTEIN: f64 = 8.0;
    /// Hydration ratio above this tags the mix "moist"
    pub const MOIST_HYDRATION: f64 = 100.0;
    /// Hydration ratio below this tags the mix "crumbly"
    pub const CRUMBLY_HYDRATION: f64 = 60.0;
    /// Sugar above this tags the mix "sweet"
    pub const SWEET_SUGAR: f64 = 20.0;
}

/// pH environment bounds applied to the midpoint of the pH envelope
pub mod ph {
    /// Midpoint below this is acidic
    pub const ACIDIC_BELOW: f64 = 5.5;
    /// Midpoint above this is alkaline
    pub const ALKALINE_ABOVE: f64 = 7.5;
}

/// Narrative clause thresholds
pub mod prediction {
    /// Hydration ratio above this reads as a high-hydration batter
    pub const BATTER_HYDRATION: f64 = 150.0;
    /// Hydration ratio at or above this reads as a thick batter or wet dough
    pub const WET_DOUGH_HYDRATION: f64 = 100.0;
    /// Hydration ratio at or above this reads as a workable dough
    pub const WORKABLE_DOUGH_HYDRATION: f64 = 60.0;
    /// Protein above this (with flour) adds the strong gluten clause
    pub const HIGH_PROTEIN: f64 = 12.0;
    /// Protein below this (with flour) adds the tender crumb clause
    pub const LOW_PROTEIN: f64 = 8.0;
    /// Fat above this adds the rich mouthfeel clause
    pub const HIGH_FAT: f64 = 20.0;
    /// Sugar above this adds the browning clause
    pub const HIGH_SUGAR: f64 = 30.0;
    /// Flour grams above this without leavening adds the critical clause
    pub const CRITICAL_UNLEAVENED_FLOUR_G: f64 = 50.0;
}

/// Warning thresholds
pub mod warnings {
    /// Hydration ratio below this (with flour) warns about a dry result
    pub const DRY_HYDRATION: f64 = 40.0;
    /// Hydration ratio above this (with flour) warns about a thin batter
    pub const THIN_BATTER_HYDRATION: f64 = 200.0;
    /// Total grams above this (with flour, no leavening) warns about density
    pub const DENSE_TOTAL_WEIGHT_G: f64 = 200.0;
    /// Sugar above this warns about gluten and yeast inhibition
    pub const HIGH_SUGAR: f64 = 50.0;
}

/// Opt-in excess leavening limits, as a percentage of flour weight
pub mod leavening {
    /// Chemical leavener grams per 100g flour above which leavening is excessive
    pub const MAX_CHEMICAL_PCT_OF_FLOUR: f64 = 6.0;
    /// Yeast grams per 100g flour above which leavening is excessive
    pub const MAX_BIOLOGICAL_PCT_OF_FLOUR: f64 = 4.0;
}
