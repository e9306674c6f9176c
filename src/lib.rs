//! Password strength assessment library
//!
//! This library scores a password against a set of heuristic rules and
//! reports a 0-100 score, a strength tier and ordered feedback.
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery with debounce and cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the interactive `pwd-assess` binary
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Optional file with extra common passwords, one per
//!   line, merged with the built-in denylist
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_assess::{init_rules, assess_password_strength, StrengthTier};
//! use secrecy::SecretString;
//!
//! // Initialize rules (call once at startup)
//! init_rules().expect("Failed to load denylist");
//!
//! let password = SecretString::new("BlueCoffeeTable42!".to_string().into());
//! let result = assess_password_strength(&password);
//!
//! assert_eq!(result.score.value(), 80);
//! assert_eq!(result.strength(), StrengthTier::VeryStrong);
//! ```

// Internal modules
mod assessor;
mod features;
mod ruleset;
mod sections;
mod types;

pub mod report;

// Public API
pub use assessor::{assess_password_strength, Assessor};
pub use features::Features;
pub use ruleset::{
    denylist_path_from_env, init_rules, init_rules_from_path, rules, RuleSet, RuleSetError,
    DENYLIST_PATH_ENV,
};
pub use types::{AssessmentResult, Feedback, Polarity, Score, StrengthTier, MAX_SCORE};

#[cfg(feature = "async")]
pub use assessor::assess_password_tx;
