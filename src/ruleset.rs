//! Rule set management module
//!
//! Holds the common-password denylist and the known bad character sequences.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable naming an optional extra denylist file.
pub const DENYLIST_PATH_ENV: &str = "PWD_DENYLIST_PATH";

static RULES: OnceLock<RuleSet> = OnceLock::new();

const COMMON_PASSWORDS: &[&str] = &[
    "123456",
    "password",
    "123456789",
    "12345",
    "12345678",
    "qwerty",
    "1234567",
    "111111",
    "123123",
    "abc123",
    "password1",
    "1234",
    "iloveyou",
    "admin",
    "welcome",
];

const BAD_SEQUENCES: &[&str] = &[
    // numeric runs
    "123", "234", "345", "456", "567", "678", "789", "012",
    // keyboard rows and columns
    "qwerty", "asdfgh", "zxcvbn", "qazwsx", "edcrfv",
];

#[derive(Error, Debug)]
pub enum RuleSetError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Static configuration consulted by the assessor.
///
/// The built-in denylist is a small illustrative sample, not a breach corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    common_passwords: HashSet<String>,
    bad_sequences: Vec<String>,
}

fn normalize(entry: &str) -> Option<String> {
    let entry = entry.trim();
    (!entry.is_empty()).then(|| entry.to_lowercase())
}

impl RuleSet {
    /// Builds a rule set from custom entries. Entries are trimmed and
    /// lowercased; blank entries are dropped.
    pub fn new<C, S>(common_passwords: C, bad_sequences: S) -> Self
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            common_passwords: common_passwords
                .into_iter()
                .filter_map(|p| normalize(p.as_ref()))
                .collect(),
            bad_sequences: bad_sequences
                .into_iter()
                .filter_map(|s| normalize(s.as_ref()))
                .collect(),
        }
    }

    /// The built-in denylist and sequence list.
    pub fn builtin() -> Self {
        Self::new(COMMON_PASSWORDS, BAD_SEQUENCES)
    }

    /// Loads additional denylist entries from a file (one per line), merged on
    /// top of the built-in rules.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RuleSetError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: FileNotFound {:?}", path);
            return Err(RuleSetError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: Empty file {:?}", path);
            return Err(RuleSetError::EmptyFile);
        }

        let mut rules = Self::builtin();
        rules
            .common_passwords
            .extend(content.lines().filter_map(normalize));

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Denylist loaded: {} passwords from {:?}",
            rules.common_passwords.len(),
            path
        );

        Ok(rules)
    }

    /// Case-insensitive membership test against the denylist.
    pub fn is_common(&self, password: &str) -> bool {
        self.common_passwords.contains(&password.to_lowercase())
    }

    /// Whether the password contains any known bad sequence, ignoring case.
    pub fn contains_bad_sequence(&self, password: &str) -> bool {
        let lowered = password.to_lowercase();
        self.bad_sequences
            .iter()
            .any(|seq| lowered.contains(seq.as_str()))
    }

    pub fn len_common(&self) -> usize {
        self.common_passwords.len()
    }

    pub fn sequences(&self) -> &[String] {
        &self.bad_sequences
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Returns the denylist path from `PWD_DENYLIST_PATH`, if set.
pub fn denylist_path_from_env() -> Option<PathBuf> {
    std::env::var_os(DENYLIST_PATH_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Initializes the process-wide rule set.
///
/// Loads `PWD_DENYLIST_PATH` when set, otherwise uses the built-in rules.
/// Idempotent: once initialized, later calls return the current entry count.
pub fn init_rules() -> Result<usize, RuleSetError> {
    match denylist_path_from_env() {
        Some(path) => init_rules_from_path(path),
        None => Ok(rules().len_common()),
    }
}

/// Initializes the process-wide rule set from a specific denylist file.
///
/// Returns the number of denylist entries in effect.
pub fn init_rules_from_path<P: AsRef<Path>>(path: P) -> Result<usize, RuleSetError> {
    // Idempotente: se gia inizializzata, ritorna subito
    if let Some(rules) = RULES.get() {
        return Ok(rules.len_common());
    }

    let loaded = RuleSet::from_path(path)?;
    Ok(RULES.get_or_init(|| loaded).len_common())
}

/// Returns the process-wide rule set, falling back to the built-in rules when
/// nothing was initialized.
pub fn rules() -> &'static RuleSet {
    RULES.get_or_init(RuleSet::builtin)
}
