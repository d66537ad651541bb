//! Field configuration.

use crate::error::PinFieldError;
use crate::format::Formatter;
use crate::validate::Validator;

/// Number of cells when none is configured.
pub const DEFAULT_LENGTH: usize = 5;

/// Options recognised by [`PinField`](crate::PinField).
///
/// # Example
///
/// ```rust
/// use pin_field::{Formatter, PinFieldConfig, Validator};
///
/// let config = PinFieldConfig::new(6)
///     .unwrap()
///     .with_validator(Validator::numeric())
///     .with_formatter(Formatter::uppercase())
///     .with_autofocus(true);
///
/// assert_eq!(config.length(), 6);
/// assert!(PinFieldConfig::new(0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PinFieldConfig {
    length: usize,
    validator: Validator,
    formatter: Formatter,
    autofocus: bool,
    disabled: bool,
}

impl PinFieldConfig {
    /// Configuration for a field of `length` cells, with default validator and formatter.
    pub fn new(length: usize) -> Result<Self, PinFieldError> {
        if length == 0 {
            return Err(PinFieldError::InvalidLength(length));
        }
        Ok(Self {
            length,
            ..Self::default()
        })
    }

    /// Replace the validator.
    pub fn with_validator(mut self, validator: impl Into<Validator>) -> Self {
        self.validator = validator.into();
        self
    }

    /// Replace the formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Focus the first cell when the field is attached to its host.
    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    /// Start disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Key validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Display formatter.
    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Whether the first cell gets focus on attach.
    pub fn autofocus(&self) -> bool {
        self.autofocus
    }

    /// Whether the field starts disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn into_parts(self) -> (usize, Validator, Formatter, bool, bool) {
        (
            self.length,
            self.validator,
            self.formatter,
            self.autofocus,
            self.disabled,
        )
    }
}

impl Default for PinFieldConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            validator: Validator::default(),
            formatter: Formatter::identity(),
            autofocus: false,
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PinFieldConfig::default();
        assert_eq!(config.length(), DEFAULT_LENGTH);
        assert!(config.validator().is_allowed("a"));
        assert!(!config.validator().is_allowed("-"));
        assert_eq!(config.formatter().format("a"), "a");
        assert!(!config.autofocus());
        assert!(!config.disabled());
    }

    #[test]
    fn test_zero_length_fails_fast() {
        assert_eq!(
            PinFieldConfig::new(0).unwrap_err(),
            PinFieldError::InvalidLength(0)
        );
    }

    #[test]
    fn test_charset_string_converts_to_validator() {
        let config = PinFieldConfig::new(4).unwrap().with_validator("01");
        assert!(config.validator().is_allowed("1"));
        assert!(!config.validator().is_allowed("2"));
    }
}
