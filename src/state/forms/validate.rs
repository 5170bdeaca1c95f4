//! Field validators
//!
//! Validation is read-time only: fields accept any input and these predicates
//! are evaluated whenever a guard or the renderer needs them.

use regex::Regex;
use std::sync::LazyLock;

/// Shape accepted for email addresses unless overridden by config
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static DEFAULT_EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("default email pattern is valid"));

/// A name is valid when it is non-empty and only contains ASCII letters.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Pure email shape predicate backed by a regular expression
#[derive(Debug, Clone)]
pub struct EmailPattern {
    re: Regex,
}

impl EmailPattern {
    /// Compile a custom pattern
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            re: Regex::new(pattern)?,
        })
    }

    pub fn matches(&self, email: &str) -> bool {
        self.re.is_match(email)
    }

    pub fn as_str(&self) -> &str {
        self.re.as_str()
    }
}

impl Default for EmailPattern {
    fn default() -> Self {
        Self {
            re: DEFAULT_EMAIL_RE.clone(),
        }
    }
}
