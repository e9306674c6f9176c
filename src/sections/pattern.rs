//! Pattern analysis section - repeats, bad sequences and single-class passwords.

use super::SectionOutcome;
use crate::features::Features;
use crate::types::Feedback;

const DEDUCTION: i64 = 5;

/// Deducts 5 points for each weakness found. Only repeats and sequences
/// produce feedback; alpha-only and numeric-only passwords are penalised
/// silently.
pub fn pattern_section(features: &Features) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    let deductions = [
        features.has_repeats,
        features.has_sequences,
        features.is_alpha_only,
        features.is_numeric_only,
    ];
    outcome.points = -(deductions.iter().filter(|&&b| b).count() as i64) * DEDUCTION;

    if features.has_repeats {
        outcome
            .feedback
            .push(Feedback::negative("Repeating characters reduce strength"));
    }
    if features.has_sequences {
        outcome
            .feedback
            .push(Feedback::negative("Sequential characters reduce strength"));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RuleSet;

    fn run(pwd: &str) -> SectionOutcome {
        pattern_section(&Features::extract(pwd, &RuleSet::builtin()))
    }

    #[test]
    fn test_pattern_section_clean_password() {
        let outcome = run("RandomPass!@#Word");
        assert_eq!(outcome, SectionOutcome::default());
    }

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let outcome = run("aaaB!#9");
        assert_eq!(outcome.points, -5);
        assert_eq!(
            outcome.feedback,
            vec![Feedback::negative("Repeating characters reduce strength")]
        );
    }

    #[test]
    fn test_pattern_section_sequences() {
        let outcome = run("Test456!");
        assert_eq!(outcome.points, -5);
        assert_eq!(
            outcome.feedback,
            vec![Feedback::negative("Sequential characters reduce strength")]
        );
    }

    #[test]
    fn test_pattern_section_repeats_before_sequences() {
        let outcome = run("111234!A");
        assert_eq!(outcome.points, -10);
        assert_eq!(
            outcome.feedback,
            vec![
                Feedback::negative("Repeating characters reduce strength"),
                Feedback::negative("Sequential characters reduce strength"),
            ]
        );
    }

    #[test]
    fn test_pattern_section_single_class_is_silent() {
        let outcome = run("letters");
        assert_eq!(outcome.points, -5);
        assert!(outcome.feedback.is_empty());

        let outcome = run("97531");
        assert_eq!(outcome.points, -5);
        assert!(outcome.feedback.is_empty());
    }

    #[test]
    fn test_pattern_section_stacked_deductions() {
        // numeric-only, repeats and a sequence
        let outcome = run("0001234");
        assert_eq!(outcome.points, -15);
        assert_eq!(outcome.feedback.len(), 2);
    }
}
