// ABOUTME: Plain-language outcome narrative and warning rules
// ABOUTME: Clauses are appended in a fixed order, each a complete sentence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use std::fmt::Write;

use crate::combination::MixProfile;
use crate::constants::{prediction, warnings};
use crate::leavening::ExcessLeavening;
use crate::models::PhEnvironment;

/// Narrative describing the expected bake
///
/// Starts with the bake type (flourless, batter, wet dough, workable dough,
/// low-hydration dough), then protein, fat, sugar, and pH clauses, the
/// critical no-leavening clause, and a closing texture summary.
#[must_use]
pub fn predict(mix: &MixProfile, texture_tags: &[String]) -> String {
    let mut text = bake_type(mix);
    let has_flour = mix.flour_weight_g > 0.0;

    if mix.total_protein > prediction::HIGH_PROTEIN && has_flour {
        text.push_str("High protein content will create a strong gluten network, resulting in chewy, elastic texture. ");
    } else if mix.total_protein < prediction::LOW_PROTEIN && has_flour {
        text.push_str("Low protein content will produce a tender, delicate crumb with minimal chewiness. ");
    }

    if mix.total_fat > prediction::HIGH_FAT {
        text.push_str("High fat content will tenderize the structure and create a rich mouthfeel. ");
    }

    if mix.total_sugar > prediction::HIGH_SUGAR {
        text.push_str("High sugar content will tenderize, retain moisture, and promote browning. ");
    }

    match mix.ph_environment {
        PhEnvironment::Acidic => text.push_str("The acidic pH environment (from ingredients like buttermilk, molasses, or citrus) will enhance chemical leavening if baking soda is present, and may slightly tenderize gluten. "),
        PhEnvironment::Alkaline => text.push_str("The alkaline environment will accelerate browning (darker color) and may produce a slightly soapy taste if baking soda is not properly neutralized by acid. "),
        PhEnvironment::Neutral => {}
    }

    if !mix.leavening.any() && mix.flour_weight_g > prediction::CRITICAL_UNLEAVENED_FLOUR_G {
        text.push_str("⚠️ CRITICAL: No leavening agent detected. This mixture will produce a very dense, flat result unless mechanical leavening (whipped eggs) or steam provides lift. Consider adding baking powder (1-2 tsp per cup flour) or baking soda (1/4 tsp per cup flour with acid). ");
    }

    if !texture_tags.is_empty() {
        let _ = write!(
            text,
            "Overall predicted texture: {}.",
            texture_tags.join(", ")
        );
    }

    text.trim().to_owned()
}

/// Round to `decimals` places with ties away from zero
///
/// `format!("{:.0}")` rounds exact ties to even, so 62.5 would print as 62.
#[must_use]
pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

fn bake_type(mix: &MixProfile) -> String {
    let ratio = round_half_up(mix.hydration_ratio_pct, 0);
    let leavened = mix.leavening.any();

    if mix.flour_weight_g <= 0.0 {
        format!(
            "This mixture contains no flour, suggesting a flourless preparation. With {}g total weight, this could be a custard, mousse, or flourless cake depending on other ingredients. ",
            mix.total_weight_g
        )
    } else if mix.hydration_ratio_pct > prediction::BATTER_HYDRATION {
        let outcome = if leavened {
            "Light, tender cake or quick bread with open crumb structure."
        } else {
            "Dense, moist quick bread or cake. Without leavening, this will be compact and heavy, similar to a moist pound cake or quick bread."
        };
        format!("This is a high-hydration batter ({ratio:.0}% hydration ratio). Expected outcome: {outcome} ")
    } else if mix.hydration_ratio_pct >= prediction::WET_DOUGH_HYDRATION {
        let outcome = if leavened {
            "Should produce a soft, cake-like texture with moderate rise."
        } else {
            "Will be dense and compact without added leavening. Consider adding baking powder, baking soda, or whipped eggs for lift."
        };
        format!("This is a thick batter or very wet dough ({ratio:.0}% hydration). Expected outcome: Moist, tender crumb. {outcome} ")
    } else if mix.hydration_ratio_pct >= prediction::WORKABLE_DOUGH_HYDRATION {
        let outcome = if mix.leavening.biological {
            "With yeast present, this will produce a classic bread with chewy texture and moderate crumb. "
        } else if mix.leavening.chemical {
            "Chemical leavening will create a biscuit or scone-like texture. "
        } else {
            "Without leavening, this will be a dense flatbread or unleavened product. "
        };
        format!("This is a workable dough ({ratio:.0}% hydration). {outcome}")
    } else {
        format!("This is a low-hydration dough ({ratio:.0}% hydration). Expected outcome: Crumbly, short texture suitable for pie crust, shortbread, or cookies. ")
    }
}

/// Cautions about the mix, in rule order, followed by any excess findings
#[must_use]
pub fn collect_warnings(mix: &MixProfile, excess: &[ExcessLeavening]) -> Vec<String> {
    let has_flour = mix.flour_weight_g > 0.0;
    let ratio = mix.hydration_ratio_pct;

    let rules = [
        (
            has_flour && ratio < warnings::DRY_HYDRATION,
            "Very low hydration may result in dry, crumbly texture. Consider adding more liquid.",
        ),
        (
            has_flour && ratio > warnings::THIN_BATTER_HYDRATION,
            "Extremely high hydration ratio. This will be a very thin batter.",
        ),
        (
            has_flour && !mix.leavening.any() && mix.total_weight_g > warnings::DENSE_TOTAL_WEIGHT_G,
            "No leavening agent detected for a substantial amount of flour. Product will be very dense unless eggs provide structure and lift.",
        ),
        (
            mix.total_sugar > warnings::HIGH_SUGAR,
            "Very high sugar content may inhibit gluten development and slow yeast fermentation if present.",
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(triggered, warning)| triggered.then_some(warning))
        .chain(excess.iter().map(|finding| finding.warning()))
        .map(str::to_owned)
        .collect()
}
