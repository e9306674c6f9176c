//! Feature extraction - the password characteristics used as scoring input.

use crate::ruleset::RuleSet;

/// Minimum run length that counts as a repeat.
const REPEAT_RUN: usize = 3;

/// Characteristics of a non-empty, non-common password.
///
/// Lengths are counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    pub length: usize,
    pub has_upper: bool,
    pub has_lower: bool,
    pub has_digit: bool,
    pub has_special: bool,
    pub has_repeats: bool,
    pub has_sequences: bool,
    pub is_alpha_only: bool,
    pub is_numeric_only: bool,
}

impl Features {
    pub fn extract(password: &str, rules: &RuleSet) -> Self {
        let non_empty = !password.is_empty();

        Self {
            length: password.chars().count(),
            has_upper: password.chars().any(char::is_uppercase),
            has_lower: password.chars().any(char::is_lowercase),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| c.is_ascii_punctuation()),
            has_repeats: has_repeated_run(password, REPEAT_RUN),
            has_sequences: rules.contains_bad_sequence(password),
            is_alpha_only: non_empty && password.chars().all(char::is_alphabetic),
            is_numeric_only: non_empty && password.chars().all(|c| c.is_ascii_digit()),
        }
    }

    /// Number of character classes present (upper, lower, digit, special).
    pub fn variety(&self) -> usize {
        [self.has_upper, self.has_lower, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// True if some character appears `run` or more times in a row, ignoring case.
fn has_repeated_run(password: &str, run: usize) -> bool {
    let chars: Vec<char> = password.chars().collect();
    if chars.len() < run {
        return false;
    }

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if same_ignoring_case(chars[i], chars[i - 1]) {
            repeated_count += 1;
            if repeated_count >= run {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }
    false
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
