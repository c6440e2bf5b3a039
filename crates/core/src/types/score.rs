//! Clamped sustainability score type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product sustainability score, always within `0..=100`.
///
/// The score is computed once at listing time from the product's material
/// and condition and never changes afterwards. Construction clamps rather
/// than fails, so every input produces a valid score.
///
/// ```
/// use ecofinds_core::EcoScore;
///
/// assert_eq!(EcoScore::clamped(120).value(), 100);
/// assert_eq!(EcoScore::clamped(-30).value(), 0);
/// assert_eq!(EcoScore::clamped(85).value(), 85);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EcoScore(u8);

impl EcoScore {
    /// The lowest possible score.
    pub const MIN: Self = Self(0);
    /// The highest possible score.
    pub const MAX: Self = Self(100);

    /// Create a score, clamping the input into `0..=100`.
    #[must_use]
    pub const fn clamped(raw: i32) -> Self {
        if raw < 0 {
            Self::MIN
        } else if raw > 100 {
            Self::MAX
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self(raw as u8)
        }
    }

    /// Get the score as a plain integer.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for EcoScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
