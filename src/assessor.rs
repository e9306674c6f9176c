//! Password assessor - main assessment logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::features::Features;
use crate::ruleset::{rules, RuleSet};
use crate::sections::SECTIONS;
use crate::types::{AssessmentResult, Score};

/// Scores passwords against a borrowed [`RuleSet`].
///
/// Assessments are pure: the same password and rules always yield the same
/// result, and an `Assessor` can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Assessor<'a> {
    rules: &'a RuleSet,
}

impl<'a> Assessor<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'a RuleSet {
        self.rules
    }

    /// Assesses a password and returns its score, tier and feedback.
    ///
    /// Empty and common passwords short-circuit to a zero score with a single
    /// reason. Every other input runs the sections in order.
    pub fn assess(&self, password: &SecretString) -> AssessmentResult {
        let pwd = password.expose_secret();

        if pwd.is_empty() {
            return AssessmentResult::rejected("Password cannot be empty");
        }
        if self.rules.is_common(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected by denylist");
            return AssessmentResult::rejected("Password is too common");
        }

        let features = Features::extract(pwd, self.rules);

        let mut raw: i64 = 0;
        let mut feedback = Vec::new();
        for (_section_name, section_fn) in SECTIONS {
            let outcome = section_fn(&features);

            #[cfg(feature = "tracing")]
            tracing::trace!(
                "section {} contributed {} points",
                _section_name,
                outcome.points
            );

            raw += outcome.points;
            feedback.extend(outcome.feedback);
        }

        let result = AssessmentResult::from_parts(Score::new(raw), feedback);

        #[cfg(feature = "tracing")]
        tracing::debug!("assessment done: score={} tier={}", result.score, result.tier);

        result
    }
}

impl Default for Assessor<'static> {
    fn default() -> Self {
        Self::new(rules())
    }
}

/// Assesses a password against the process-wide rule set.
pub fn assess_password_strength(password: &SecretString) -> AssessmentResult {
    Assessor::default().assess(password)
}

/// Async version that sends the assessment via channel.
///
/// Waits `debounce` first; if `token` is cancelled in the meantime nothing is
/// sent. A closed receiver is logged and otherwise ignored.
#[cfg(feature = "async")]
pub async fn assess_password_tx(
    password: &SecretString,
    token: CancellationToken,
    debounce: Duration,
    tx: mpsc::Sender<AssessmentResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("assessment is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("assessment cancelled before start");
            return;
        }
        _ = tokio::time::sleep(debounce) => {}
    }

    let result = assess_password_strength(password);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password assessment result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Feedback, StrengthTier};
    use proptest::prelude::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    fn assess(pwd: &str) -> AssessmentResult {
        Assessor::new(&RuleSet::builtin()).assess(&secret(pwd))
    }

    #[test]
    fn test_assess_empty_password() {
        let result = assess("");
        assert_eq!(result.score.value(), 0);
        assert_eq!(result.strength(), StrengthTier::VeryWeak);
        assert_eq!(result.feedback, vec![Feedback::negative("Password cannot be empty")]);
    }

    #[test]
    fn test_assess_common_password() {
        for pwd in ["password", "PASSWORD", "Admin", "abc123"] {
            let result = assess(pwd);
            assert_eq!(result.score.value(), 0, "{}", pwd);
            assert_eq!(result.strength(), StrengthTier::VeryWeak);
            assert_eq!(result.feedback, vec![Feedback::negative("Password is too common")]);
        }
    }

    #[test]
    fn test_assess_repeated_letters() {
        let result = assess("aaaaaaaaaaaa");
        assert_eq!(result.score.value(), 40);
        assert_eq!(result.strength(), StrengthTier::Moderate);
        assert_eq!(
            result.messages(),
            vec![
                "Good password length",
                "Contains letters",
                "Missing numbers",
                "Missing special characters",
                "Repeating characters reduce strength",
            ]
        );
    }

    #[test]
    fn test_assess_very_strong_password() {
        let result = assess("BlueCoffeeTable42!");
        assert_eq!(result.score.value(), 80);
        assert_eq!(result.strength(), StrengthTier::VeryStrong);
        assert!(result.feedback.iter().all(Feedback::is_positive));
        assert_eq!(result.feedback.len(), 4);
    }

    #[test]
    fn test_assess_short_with_sequence() {
        let result = assess("xyz123");
        assert_eq!(result.score.value(), 30);
        assert_eq!(result.strength(), StrengthTier::Weak);
        assert_eq!(
            result.messages(),
            vec![
                "Password is too short",
                "Contains letters",
                "Contains numbers",
                "Missing special characters",
                "Sequential characters reduce strength",
            ]
        );
    }

    #[test]
    fn test_assess_denylist_entry_scored_without_denylist() {
        let rules = RuleSet::new(Vec::<&str>::new(), ["123", "qwerty"]);
        let result = Assessor::new(&rules).assess(&secret("abc123"));
        assert_eq!(result.score.value(), 30);
        assert_eq!(result.strength(), StrengthTier::Weak);
    }

    #[test]
    fn test_assess_strong_tier() {
        // 8 chars (+30), upper, lower, digit (+30), no deductions
        let result = assess("Tr0ubadr");
        assert_eq!(result.score.value(), 60);
        assert_eq!(result.strength(), StrengthTier::Strong);
    }

    #[test]
    fn test_assess_floor_score() {
        // 5 chars (+5), digit only (+10), repeats, sequence, numeric-only (-15)
        let result = assess("00012");
        assert_eq!(result.score.value(), 0);
        assert_eq!(result.strength(), StrengthTier::VeryWeak);
        assert_eq!(result.feedback.len(), 6);
    }

    #[test]
    fn test_assess_non_ascii_and_control_input() {
        let result = assess("пароль\u{7}");
        assert_eq!(result.score.value(), 25);
        assert_eq!(result.strength(), StrengthTier::Weak);
    }

    #[test]
    fn test_assess_is_deterministic() {
        let rules = RuleSet::builtin();
        let assessor = Assessor::new(&rules);
        let pwd = secret("S0me!Passw0rd");
        assert_eq!(assessor.assess(&pwd), assessor.assess(&pwd));
    }

    #[test]
    fn test_assess_password_strength_uses_global_rules() {
        let result = assess_password_strength(&secret("qwerty"));
        assert_eq!(result.feedback, vec![Feedback::negative("Password is too common")]);
    }

    #[test]
    fn test_assessor_shared_across_threads() {
        let rules = RuleSet::builtin();
        let assessor = Assessor::new(&rules);
        let expected = assessor.assess(&secret("Shared#Pass9"));
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(assessor.assess(&secret("Shared#Pass9")), expected));
            }
        });
    }

    proptest! {
        #[test]
        fn prop_score_bounded_and_tier_consistent(pwd in "\\PC{0,40}") {
            let result = assess(&pwd);
            prop_assert!(result.score.value() <= 100);
            prop_assert_eq!(result.tier, StrengthTier::from_score(result.score));
            prop_assert!(!result.feedback.is_empty());
        }

        #[test]
        fn prop_assessment_is_deterministic(pwd in "[ -~]{0,24}") {
            prop_assert_eq!(assess(&pwd), assess(&pwd));
        }

        #[test]
        fn prop_adding_digit_never_lowers_variety(pwd in "[a-z]{6,20}") {
            let rules = RuleSet::new(Vec::<&str>::new(), Vec::<&str>::new());
            let before = Features::extract(&pwd, &rules);
            let mut with_digit = pwd.clone();
            with_digit.pop();
            with_digit.push('7');
            let after = Features::extract(&with_digit, &rules);
            prop_assert!(after.variety() >= before.variety());

            let assessor = Assessor::new(&rules);
            let old = assessor.assess(&secret(&pwd)).score.value();
            let new = assessor.assess(&secret(&with_digit)).score.value();
            prop_assert!(new + 5 >= old);
        }
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test]
    async fn test_assess_password_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        assess_password_tx(&secret("TestPass12!x"), token, Duration::ZERO, tx).await;

        let result = rx.recv().await.expect("Should receive assessment");
        assert_eq!(result.score.value(), 80);
    }

    #[tokio::test]
    async fn test_assess_password_tx_cancelled() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        assess_password_tx(&secret("TestPass12!x"), token, Duration::from_secs(60), tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_assess_password_tx_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic
        assess_password_tx(&secret("whatever"), CancellationToken::new(), Duration::ZERO, tx)
            .await;
    }
}
