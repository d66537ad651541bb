//! Display formatting for accepted characters.

use std::fmt;
use std::sync::Arc;

/// Maps an accepted character to the form written into its cell.
///
/// The code reported through notifications is assembled from cell contents, so it reflects the
/// formatted characters.
#[derive(Clone, Default)]
pub struct Formatter {
    map: Option<Arc<dyn Fn(&str) -> String + Send + Sync>>,
}

impl Formatter {
    /// The identity formatter.
    pub fn identity() -> Self {
        Self::default()
    }

    /// A formatter backed by `f`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self { map: Some(Arc::new(f)) }
    }

    /// Uppercase every character.
    pub fn uppercase() -> Self {
        Self::new(str::to_uppercase)
    }

    /// Format `key` for display. Empty values are returned untouched.
    pub fn format(&self, key: &str) -> String {
        match &self.map {
            Some(f) if !key.is_empty() => f(key),
            _ => key.to_string(),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.map {
            Some(_) => f.write_str("Formatter(custom)"),
            None => f.write_str("Formatter(identity)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_custom() {
        assert_eq!(Formatter::identity().format("a"), "a");
        assert_eq!(Formatter::uppercase().format("a"), "A");

        let masked = Formatter::new(|_| "*".to_string());
        assert_eq!(masked.format("7"), "*");
        assert_eq!(masked.format(""), "");
    }
}
