// ABOUTME: Protein summary, pH environment, and texture tag derivation
// ABOUTME: Texture tags are appended in a fixed rule order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use bakebase_core::models::IngredientRecord;

use crate::combination::MixProfile;
use crate::constants::{classification, ph, protein, texture};
use crate::models::{PhEnvironment, PhRange};
use crate::prediction::round_half_up;

/// Description of the accumulated protein band
#[must_use]
pub fn protein_summary(total_protein: f64) -> &'static str {
    if total_protein < protein::LOW {
        "Very low protein content; minimal structure. Relies on starch, fat, or eggs for texture."
    } else if total_protein < protein::MODERATE {
        "Low protein content; tender, delicate crumb. Limited gluten development."
    } else if total_protein < protein::HIGH {
        "Moderate protein content; balanced structure. Good gluten development for bread or cakes."
    } else {
        "High protein content; strong gluten network. Produces chewy, elastic texture."
    }
}

/// Running pH bounds across the mix; fats without pH data are ignored
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhEnvelope {
    /// Lowest `ph_level_min` seen
    pub min: Option<f64>,
    /// Highest `ph_level_max` seen
    pub max: Option<f64>,
}

impl PhEnvelope {
    /// Widen the envelope with a record's bounds
    pub fn observe(&mut self, record: &IngredientRecord) {
        if let Some(min) = record.ph_level_min {
            self.min = Some(self.min.map_or(min, |current| current.min(min)));
        }
        if let Some(max) = record.ph_level_max {
            self.max = Some(self.max.map_or(max, |current| current.max(max)));
        }
    }

    /// Bounds reported to clients, 7.0 where absent
    #[must_use]
    pub fn range(&self) -> PhRange {
        PhRange {
            min: self.min.unwrap_or(classification::NEUTRAL_PH),
            max: self.max.unwrap_or(classification::NEUTRAL_PH),
        }
    }

    /// Acidity class of the envelope midpoint; neutral without both bounds
    #[must_use]
    pub fn environment(&self) -> PhEnvironment {
        match (self.min, self.max) {
            (Some(min), Some(max)) => classify_ph((min + max) / 2.0),
            _ => PhEnvironment::Neutral,
        }
    }

    /// Plain-language description of the envelope
    #[must_use]
    pub fn describe(&self) -> String {
        let (Some(min), Some(max)) = (self.min, self.max) else {
            return "pH data not available for all ingredients.".to_owned();
        };
        let environment = self.environment();
        let effect = match environment {
            PhEnvironment::Acidic => {
                "Acidic environment enhances baking soda leavening, may tenderize gluten slightly."
            }
            PhEnvironment::Alkaline => {
                "Alkaline environment accelerates browning (Maillard reaction), may weaken gluten."
            }
            PhEnvironment::Neutral => "Neutral pH, standard baking environment.",
        };
        let (min, max) = (round_half_up(min, 1), round_half_up(max, 1));
        format!("pH range {min:.1}-{max:.1} ({environment}). {effect}")
    }
}

/// Acidity class of a single pH value
#[must_use]
pub fn classify_ph(value: f64) -> PhEnvironment {
    if value < ph::ACIDIC_BELOW {
        PhEnvironment::Acidic
    } else if value > ph::ALKALINE_ABOVE {
        PhEnvironment::Alkaline
    } else {
        PhEnvironment::Neutral
    }
}

/// Texture tags triggered by the mix, in rule order
#[must_use]
pub fn texture_tags(mix: &MixProfile) -> Vec<String> {
    let has_flour = mix.flour_weight_g > 0.0;
    let has_leavening = mix.leavening.any();

    let rules = [
        (mix.total_fat > texture::RICH_FAT, "rich"),
        (mix.total_fat > texture::TENDER_FAT, "tender"),
        (mix.total_protein > texture::CHEWY_PROTEIN && has_flour, "chewy"),
        (mix.total_protein < texture::DELICATE_PROTEIN, "delicate"),
        (mix.hydration_ratio_pct > texture::MOIST_HYDRATION, "moist"),
        (mix.hydration_ratio_pct < texture::CRUMBLY_HYDRATION, "crumbly"),
        (mix.total_sugar > texture::SWEET_SUGAR, "sweet"),
        (has_leavening, "airy"),
        (!has_leavening && has_flour, "dense"),
    ];

    rules
        .into_iter()
        .filter_map(|(triggered, tag)| triggered.then(|| tag.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leavening::LeaveningTally;
    use bakebase_core::models::IngredientCategory;

    fn profile(fat: f64, protein: f64, sugar: f64, hydration_ratio_pct: f64) -> MixProfile {
        MixProfile {
            total_weight_g: 500.0,
            total_protein: protein,
            total_fat: fat,
            total_sugar: sugar,
            flour_weight_g: 250.0,
            hydration_ratio_pct,
            leavening: LeaveningTally::default(),
            ph_environment: PhEnvironment::Neutral,
        }
    }

    #[test]
    fn test_protein_bands() {
        assert!(protein_summary(4.9).starts_with("Very low"));
        assert!(protein_summary(5.0).starts_with("Low"));
        assert!(protein_summary(12.9).starts_with("Moderate"));
        assert!(protein_summary(13.0).starts_with("High"));
    }

    #[test]
    fn test_envelope_ignores_missing_bounds() {
        let mut envelope = PhEnvelope::default();
        envelope.observe(&IngredientRecord::new("b", "Butter", IngredientCategory::Fat));
        assert_eq!(envelope.environment(), PhEnvironment::Neutral);
        assert_eq!(envelope.describe(), "pH data not available for all ingredients.");
        assert_eq!(envelope.range(), PhRange { min: 7.0, max: 7.0 });

        envelope.observe(
            &IngredientRecord::new("v", "Vinegar", IngredientCategory::Acid).with_ph(2.4, 3.4),
        );
        envelope.observe(
            &IngredientRecord::new("s", "Baking Soda", IngredientCategory::Leavener).with_ph(8.3, 8.4),
        );
        assert_eq!(envelope.range(), PhRange { min: 2.4, max: 8.4 });
        assert_eq!(envelope.environment(), PhEnvironment::Neutral);
        assert_eq!(
            envelope.describe(),
            "pH range 2.4-8.4 (neutral). Neutral pH, standard baking environment."
        );
    }

    #[test]
    fn test_classify_ph_bounds_are_exclusive() {
        assert_eq!(classify_ph(5.4), PhEnvironment::Acidic);
        assert_eq!(classify_ph(5.5), PhEnvironment::Neutral);
        assert_eq!(classify_ph(7.5), PhEnvironment::Neutral);
        assert_eq!(classify_ph(7.6), PhEnvironment::Alkaline);
    }

    #[test]
    fn test_rich_leavened_tags_in_rule_order() {
        let mut mix = profile(30.0, 13.0, 25.0, 120.0);
        mix.leavening.chemical = true;
        assert_eq!(
            texture_tags(&mix),
            ["rich", "tender", "chewy", "moist", "sweet", "airy"]
        );
    }

    #[test]
    fn test_lean_unleavened_tags_in_rule_order() {
        let mix = profile(16.0, 5.0, 0.0, 40.0);
        assert_eq!(texture_tags(&mix), ["rich", "delicate", "crumbly", "dense"]);
    }

    #[test]
    fn test_tag_thresholds_are_exclusive() {
        let mut mix = profile(25.0, 12.0, 20.0, 100.0);
        mix.leavening.mechanical = true;
        assert_eq!(texture_tags(&mix), ["rich", "airy"]);

        let mut at_lower_bounds = profile(15.0, 8.0, 0.0, 60.0);
        at_lower_bounds.leavening.biological = true;
        assert_eq!(texture_tags(&at_lower_bounds), ["airy"]);
    }

    #[test]
    fn test_chewy_and_dense_need_flour() {
        let mut mix = profile(0.0, 20.0, 0.0, 80.0);
        mix.flour_weight_g = 0.0;
        assert!(texture_tags(&mix).is_empty());
    }

    #[test]
    fn test_describe_rounds_ties_up() {
        let mut envelope = PhEnvelope::default();
        envelope.observe(
            &IngredientRecord::new("y", "Yogurt", IngredientCategory::Dairy).with_ph(4.25, 4.75),
        );
        assert_eq!(
            envelope.describe(),
            "pH range 4.3-4.8 (acidic). Acidic environment enhances baking soda leavening, may tenderize gluten slightly."
        );
    }
}
