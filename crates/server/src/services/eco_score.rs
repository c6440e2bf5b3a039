//! EcoScore calculator.
//!
//! A pure, total function: every (material, condition) pair, including
//! unknown and empty strings, produces a score in `0..=100`. Unknown inputs
//! simply contribute nothing beyond the base score.
//!
//! The adjustment tables below are the canonical server-side tables. The
//! original client shipped a larger preview table (leather, metal, wood,
//! glass, ceramic, polyester); those entries are deliberately not merged
//! here, so a client preview using them may differ from the stored score.

use ecofinds_core::EcoScore;

/// Every score starts here before adjustments.
const BASE_SCORE: i32 = 50;

/// Material adjustments, matched case-insensitively.
const MATERIAL_ADJUSTMENTS: &[(&str, i32)] = &[
    ("recycled", 30),
    ("organic", 25),
    ("bamboo", 20),
    ("cotton", 15),
    ("plastic", -10),
    ("synthetic", -15),
];

/// Condition adjustments, matched case-insensitively.
const CONDITION_ADJUSTMENTS: &[(&str, i32)] = &[
    ("excellent", 20),
    ("good", 15),
    ("fair", 10),
    ("poor", 5),
];

fn adjustment(table: &[(&str, i32)], key: &str) -> i32 {
    table
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map_or(0, |(_, delta)| *delta)
}

/// Compute the sustainability score for a product.
///
/// Deterministic and total; there is no error path.
#[must_use]
pub fn compute_eco_score(material: &str, condition: &str) -> EcoScore {
    EcoScore::clamped(
        BASE_SCORE
            + adjustment(MATERIAL_ADJUSTMENTS, material)
            + adjustment(CONDITION_ADJUSTMENTS, condition),
    )
}
