//! Length section - scores and comments on password length.

use super::SectionOutcome;
use crate::features::Features;
use crate::types::Feedback;

const GOOD_LENGTH: usize = 12;
const ACCEPTABLE_LENGTH: usize = 8;
const MIN_LENGTH: usize = 6;

/// Awards 40/30/15/5 points for lengths of at least 12/8/6/any characters.
pub fn length_section(features: &Features) -> SectionOutcome {
    let points = match features.length {
        n if n >= GOOD_LENGTH => 40,
        n if n >= ACCEPTABLE_LENGTH => 30,
        n if n >= MIN_LENGTH => 15,
        _ => 5,
    };

    let feedback = if features.length >= GOOD_LENGTH {
        Feedback::positive("Good password length")
    } else if features.length >= ACCEPTABLE_LENGTH {
        Feedback::positive("Acceptable length")
    } else {
        Feedback::negative("Password is too short")
    };

    SectionOutcome {
        points,
        feedback: vec![feedback],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::RuleSet;

    fn run(pwd: &str) -> SectionOutcome {
        length_section(&Features::extract(pwd, &RuleSet::builtin()))
    }

    #[test]
    fn test_length_section_too_short() {
        let outcome = run("Sh0r!");
        assert_eq!(outcome.points, 5);
        assert_eq!(outcome.feedback, vec![Feedback::negative("Password is too short")]);
    }

    #[test]
    fn test_length_section_six_chars() {
        let outcome = run("Sh0rt!");
        assert_eq!(outcome.points, 15);
        assert_eq!(outcome.feedback, vec![Feedback::negative("Password is too short")]);
    }

    #[test]
    fn test_length_section_exactly_acceptable() {
        let outcome = run("abcdefgh");
        assert_eq!(outcome.points, 30);
        assert_eq!(outcome.feedback, vec![Feedback::positive("Acceptable length")]);
    }

    #[test]
    fn test_length_section_good() {
        let outcome = run("LongEnough12");
        assert_eq!(outcome.points, 40);
        assert_eq!(outcome.feedback, vec![Feedback::positive("Good password length")]);
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let outcome = run("ééééééé");
        assert_eq!(outcome.points, 15);
    }
}
