//! Key validation policy.
//!
//! A [`Validator`] decides whether a single character may be stored in a cell. Whatever the
//! validator kind, empty keys and keys longer than one character are rejected, so named keys
//! such as `"Escape"` and multi-character fragments never pass.

use crate::error::PinFieldError;
use crate::text::{char_len, chars};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// Pattern used when no validator is configured: one ASCII letter or digit.
pub const DEFAULT_PATTERN: &str = "^[a-zA-Z0-9]$";

/// Predicate signature accepted by [`Validator::predicate`].
pub type KeyPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Policy deciding whether a character is acceptable.
#[derive(Clone)]
pub enum Validator {
    /// Accept any character contained in this string.
    Charset(String),
    /// Accept any key equal to one of these entries.
    List(Vec<String>),
    /// Accept keys matched by the pattern.
    Pattern(Regex),
    /// Accept keys for which the predicate returns `true`.
    Predicate(KeyPredicate),
}

impl Validator {
    /// Validator accepting the characters of `chars`.
    pub fn charset(chars: impl Into<String>) -> Self {
        Validator::Charset(chars.into())
    }

    /// Validator accepting the given keys.
    pub fn list<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::List(keys.into_iter().map(Into::into).collect())
    }

    /// Validator compiled from a regex pattern.
    pub fn pattern(pattern: &str) -> Result<Self, PinFieldError> {
        Regex::new(pattern)
            .map(Validator::Pattern)
            .map_err(|err| PinFieldError::InvalidPattern {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })
    }

    /// Validator delegating to a predicate.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Validator::Predicate(Arc::new(f))
    }

    /// Digits only.
    pub fn numeric() -> Self {
        Validator::charset("0123456789")
    }

    /// Returns `true` if `key` may be stored in a cell.
    pub fn is_allowed(&self, key: &str) -> bool {
        if key.is_empty() || char_len(key) > 1 {
            return false;
        }

        match self {
            Validator::Charset(set) => chars(set).contains(&key),
            Validator::List(keys) => keys.iter().any(|k| k == key),
            Validator::Pattern(re) => re.is_match(key),
            Validator::Predicate(f) => f(key),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator::Pattern(Regex::new(DEFAULT_PATTERN).expect("default pattern compiles"))
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::Charset(chars) => f.debug_tuple("Charset").field(chars).finish(),
            Validator::List(keys) => f.debug_tuple("List").field(keys).finish(),
            Validator::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Validator::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<&str> for Validator {
    fn from(chars: &str) -> Self {
        Validator::charset(chars)
    }
}

impl From<Vec<String>> for Validator {
    fn from(keys: Vec<String>) -> Self {
        Validator::List(keys)
    }
}

impl From<Regex> for Validator {
    fn from(re: Regex) -> Self {
        Validator::Pattern(re)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_accepts_ascii_alphanumerics_only() {
        let v = Validator::default();
        assert!(v.is_allowed("a"));
        assert!(v.is_allowed("Z"));
        assert!(v.is_allowed("7"));
        assert!(!v.is_allowed("!"));
        assert!(!v.is_allowed(" "));
        assert!(!v.is_allowed("é"));
    }

    #[test]
    fn test_empty_and_long_keys_always_rejected() {
        let always = Validator::predicate(|_| true);
        assert!(!always.is_allowed(""));
        assert!(!always.is_allowed("ab"));
        assert!(!always.is_allowed("Escape"));
        assert!(always.is_allowed("x"));

        // A charset containing "ab" still rejects the two-character key "ab".
        assert!(!Validator::charset("abc").is_allowed("ab"));
    }

    #[test]
    fn test_charset_and_list() {
        let hex = Validator::charset("0123456789abcdef");
        assert!(hex.is_allowed("f"));
        assert!(!hex.is_allowed("g"));

        let list = Validator::list(["x", "y"]);
        assert!(list.is_allowed("y"));
        assert!(!list.is_allowed("z"));
    }

    #[test]
    fn test_pattern_compile_error_is_reported() {
        let err = Validator::pattern("[").unwrap_err();
        assert!(matches!(err, PinFieldError::InvalidPattern { ref pattern, .. } if pattern == "["));

        let digits = Validator::pattern(r"^\d$").unwrap();
        assert!(digits.is_allowed("4"));
        assert!(!digits.is_allowed("x"));
    }

    #[test]
    fn test_single_grapheme_with_combining_mark_reaches_validator() {
        let v = Validator::predicate(|key| key.starts_with('e'));
        assert!(v.is_allowed("e\u{301}"));
    }

    #[test]
    fn test_charset_matches_whole_graphemes() {
        let accented = Validator::charset("e\u{301}x");
        assert!(accented.is_allowed("e\u{301}"));
        assert!(accented.is_allowed("x"));
        assert!(!accented.is_allowed("e"));
        assert!(!accented.is_allowed("\u{301}"));

        let flags = Validator::charset("\u{1F1EB}\u{1F1F7}");
        assert!(flags.is_allowed("\u{1F1EB}\u{1F1F7}"));
        assert!(!flags.is_allowed("\u{1F1EB}"));
    }
}
