//! Password scoring sections
//!
//! Each section scores one aspect of the extracted features and emits its
//! feedback items. Sections run in a fixed order, which is also the order of
//! the feedback list.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::variety_section;

use crate::features::Features;
use crate::types::Feedback;

/// Score contribution and feedback of a single section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: i64,
    pub feedback: Vec<Feedback>,
}

pub type Section = fn(&Features) -> SectionOutcome;

/// Sections in evaluation order.
pub const SECTIONS: &[(&str, Section)] = &[
    ("length", length_section),
    ("variety", variety_section),
    ("pattern", pattern_section),
];
