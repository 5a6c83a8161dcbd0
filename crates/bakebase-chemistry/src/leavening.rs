// ABOUTME: Leavening presence tracking and adequacy verdict
// ABOUTME: Steam counts as mechanical; excess detection is opt-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 BakeBase

use bakebase_core::models::{IngredientRecord, LeaveningType};

use crate::constants::leavening;
use crate::models::{AnalyzerOptions, LeaveningAdequacy, LeaveningAnalysis};

/// Leavening seen while walking the mix
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LeaveningTally {
    /// Yeast seen
    pub biological: bool,
    /// Baking powder or soda seen
    pub chemical: bool,
    /// Mechanical or steam leavening seen
    pub mechanical: bool,
    /// Grams of biological leaveners
    pub biological_g: f64,
    /// Grams of chemical leaveners
    pub chemical_g: f64,
}

impl LeaveningTally {
    /// Record `grams` of an ingredient
    pub fn record(&mut self, record: &IngredientRecord, grams: f64) {
        match record.leavening_type {
            Some(LeaveningType::Biological) => {
                self.biological = true;
                self.biological_g += grams;
            }
            Some(LeaveningType::Chemical) => {
                self.chemical = true;
                self.chemical_g += grams;
            }
            Some(LeaveningType::Mechanical | LeaveningType::Steam) => self.mechanical = true,
            None => {}
        }
    }

    /// Whether any leavening type was seen
    #[must_use]
    pub const fn any(&self) -> bool {
        self.biological || self.chemical || self.mechanical
    }
}

/// Leavener present in a quantity above its limit relative to flour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExcessLeavening {
    /// Chemical leaveners above 6% of flour weight
    Chemical,
    /// Yeast above 4% of flour weight
    Biological,
}

impl ExcessLeavening {
    /// Sentence appended to the leavening notes
    #[must_use]
    pub const fn note(self) -> &'static str {
        match self {
            Self::Chemical => "Chemical leavening exceeds 6% of flour weight.",
            Self::Biological => "Yeast exceeds 4% of flour weight.",
        }
    }

    /// Warning appended to the analysis warnings
    #[must_use]
    pub const fn warning(self) -> &'static str {
        match self {
            Self::Chemical => "Excessive chemical leavening may cause a bitter or soapy taste and a coarse crumb that rises then collapses.",
            Self::Biological => "Excessive yeast may cause over-proofing, a yeasty flavor, and a weak structure that collapses.",
        }
    }
}

/// Leaveners whose grams exceed their limit relative to flour grams
///
/// Empty when there is no flour.
#[must_use]
pub fn detect_excess(tally: &LeaveningTally, flour_weight_g: f64) -> Vec<ExcessLeavening> {
    let mut excess = Vec::new();
    if flour_weight_g <= 0.0 {
        return excess;
    }
    if tally.chemical_g * 100.0 / flour_weight_g > leavening::MAX_CHEMICAL_PCT_OF_FLOUR {
        excess.push(ExcessLeavening::Chemical);
    }
    if tally.biological_g * 100.0 / flour_weight_g > leavening::MAX_BIOLOGICAL_PCT_OF_FLOUR {
        excess.push(ExcessLeavening::Biological);
    }
    excess
}

/// Build the leavening section and any excess findings
///
/// Findings are only computed when `options.detect_excess_leavening` is set;
/// otherwise the verdict is `none` or `adequate`.
#[must_use]
pub fn analyze_leavening(
    tally: &LeaveningTally,
    flour_weight_g: f64,
    options: &AnalyzerOptions,
) -> (LeaveningAnalysis, Vec<ExcessLeavening>) {
    let excess = if options.detect_excess_leavening {
        detect_excess(tally, flour_weight_g)
    } else {
        Vec::new()
    };

    let (adequacy, notes) = if tally.any() {
        let mut notes = format!("Leavening present: {}.", present_types(tally).join(", "));
        for finding in &excess {
            notes.push(' ');
            notes.push_str(finding.note());
        }
        let adequacy = if excess.is_empty() {
            LeaveningAdequacy::Adequate
        } else {
            LeaveningAdequacy::Excessive
        };
        (adequacy, notes)
    } else {
        (
            LeaveningAdequacy::None,
            "No leavening detected. Product will be dense (flatbread, unleavened bread, or must rely on eggs/steam).".to_owned(),
        )
    };

    let analysis = LeaveningAnalysis {
        biological_present: tally.biological,
        chemical_present: tally.chemical,
        mechanical_present: tally.mechanical,
        adequacy,
        notes,
    };
    (analysis, excess)
}

fn present_types(tally: &LeaveningTally) -> Vec<&'static str> {
    let mut types = Vec::with_capacity(3);
    if tally.biological {
        types.push("biological (yeast)");
    }
    if tally.chemical {
        types.push("chemical (baking powder/soda)");
    }
    if tally.mechanical {
        types.push("mechanical (whipped eggs/steam)");
    }
    types
}
