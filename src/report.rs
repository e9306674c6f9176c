//! Plain-text rendering of an assessment for terminal front-ends.

use std::fmt;

use crate::types::{AssessmentResult, Polarity, Score};

/// Number of segments in the strength meter.
pub const METER_WIDTH: usize = 20;

const METER_FILLED: char = '█';
const METER_EMPTY: char = '░';

pub const RECOMMENDATIONS: &[&str] = &[
    "Use at least 12 characters",
    "Mix uppercase and lowercase letters",
    "Add numbers and special characters",
    "Avoid repeated or sequential characters",
    "Avoid common words and known passwords",
    "Consider a passphrase of several unrelated words",
];

/// Renders a fixed-width meter whose filled share is `score / 100`, rounded
/// down to whole segments.
pub fn render_meter(score: Score, width: usize) -> String {
    let filled = score.value() as usize * width / 100;
    let mut meter = String::with_capacity(width * METER_FILLED.len_utf8() + 2);
    meter.push('[');
    meter.extend(std::iter::repeat_n(METER_FILLED, filled));
    meter.extend(std::iter::repeat_n(METER_EMPTY, width - filled));
    meter.push(']');
    meter
}

/// Returns `true` for the inputs that end an interactive session.
pub fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit")
}

/// Kind of a rendered line, so front-ends can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Meter,
    Tier,
    Positive,
    Negative,
    Heading,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
}

/// Line-oriented view of an [`AssessmentResult`].
#[derive(Debug, Clone)]
pub struct Report<'a> {
    result: &'a AssessmentResult,
}

impl<'a> Report<'a> {
    pub fn new(result: &'a AssessmentResult) -> Self {
        Self { result }
    }

    pub fn result(&self) -> &'a AssessmentResult {
        self.result
    }

    pub fn lines(&self) -> Vec<ReportLine> {
        let mut lines = vec![
            ReportLine {
                kind: LineKind::Meter,
                text: format!(
                    "{} {}",
                    render_meter(self.result.score, METER_WIDTH),
                    self.result.score
                ),
            },
            ReportLine {
                kind: LineKind::Tier,
                text: format!("Strength: {}", self.result.tier),
            },
        ];

        lines.extend(self.result.feedback.iter().map(|item| match item.polarity {
            Polarity::Positive => ReportLine {
                kind: LineKind::Positive,
                text: format!("+ {}", item),
            },
            Polarity::Negative => ReportLine {
                kind: LineKind::Negative,
                text: format!("- {}", item),
            },
        }));

        if self.result.tier.needs_improvement() {
            lines.push(ReportLine {
                kind: LineKind::Heading,
                text: "Recommendations:".to_string(),
            });
            lines.extend(RECOMMENDATIONS.iter().map(|r| ReportLine {
                kind: LineKind::Recommendation,
                text: format!("  * {}", r),
            }));
        }

        lines
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}
