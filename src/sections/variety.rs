//! Character variety section - uppercase, lowercase, numbers, special chars.

use super::SectionOutcome;
use crate::features::Features;
use crate::types::Feedback;

const POINTS_PER_CLASS: i64 = 10;

/// Awards 10 points per character class and reports letter case, digits and
/// special characters, in that order.
pub fn variety_section(features: &Features) -> SectionOutcome {
    let points = features.variety() as i64 * POINTS_PER_CLASS;

    let case = match (features.has_upper, features.has_lower) {
        (true, true) => Feedback::positive("Contains both uppercase and lowercase letters"),
        (true, false) | (false, true) => Feedback::positive("Contains letters"),
        (false, false) => Feedback::negative("Missing letters"),
    };

    let digits = if features.has_digit {
        Feedback::positive("Contains numbers")
    } else {
        Feedback::negative("Missing numbers")
    };

    let special = if features.has_special {
        Feedback::positive("Contains special characters")
    } else {
        Feedback::negative("Missing special characters")
    };

    SectionOutcome {
        points,
        feedback: vec![case, digits, special],
    }
}
