//! Result types produced by the assessor.

use std::fmt;

/// Upper bound of the score scale.
pub const MAX_SCORE: u8 = 100;

/// Password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Builds a score from a raw accumulator, clamping to `0..=100`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Discrete strength classification, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Maps a score to its tier. Lower bounds are inclusive.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            80.. => StrengthTier::VeryStrong,
            60..=79 => StrengthTier::Strong,
            40..=59 => StrengthTier::Moderate,
            20..=39 => StrengthTier::Weak,
            _ => StrengthTier::VeryWeak,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Weak => "Weak",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// Whether a front-end should show improvement recommendations.
    pub fn needs_improvement(self) -> bool {
        self <= StrengthTier::Weak
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

/// A single feedback item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub polarity: Polarity,
    pub message: &'static str,
}

impl Feedback {
    pub const fn positive(message: &'static str) -> Self {
        Self {
            polarity: Polarity::Positive,
            message,
        }
    }

    pub const fn negative(message: &'static str) -> Self {
        Self {
            polarity: Polarity::Negative,
            message,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.polarity == Polarity::Positive
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Outcome of a single assessment.
///
/// `tier` is always derived from `score`; build values through
/// [`AssessmentResult::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    pub score: Score,
    pub tier: StrengthTier,
    pub feedback: Vec<Feedback>,
}

impl AssessmentResult {
    pub fn from_parts(score: Score, feedback: Vec<Feedback>) -> Self {
        Self {
            score,
            tier: StrengthTier::from_score(score),
            feedback,
        }
    }

    /// Zero-score result carrying a single negative reason.
    pub(crate) fn rejected(message: &'static str) -> Self {
        Self::from_parts(Score::new(0), vec![Feedback::negative(message)])
    }

    pub fn strength(&self) -> StrengthTier {
        self.tier
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.feedback.iter().map(|f| f.message).collect()
    }
}
