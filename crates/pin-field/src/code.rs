//! Code assembly.
//!
//! The code is never stored: it is rebuilt from cell contents each time it is needed, so the
//! cells stay the single source of truth.

use crate::text::char_len;
use std::str::FromStr;

/// Layout direction of the surrounding document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left: cells are read from the last one to the first one.
    Rtl,
}

impl Direction {
    /// Interpret an optional `dir` attribute value. Anything other than `rtl` is left to right.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("rtl") => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }
}

impl FromStr for Direction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Direction::from_attribute(Some(s)))
    }
}

/// Concatenate trimmed cell values in reading order.
pub fn assemble_code<I, S>(values: I, direction: Direction) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parts: Vec<S> = values.into_iter().collect();
    if direction == Direction::Rtl {
        parts.reverse();
    }
    parts.iter().map(|v| v.as_ref().trim()).collect()
}

/// Returns `true` if `code` fills a field of `length` cells.
pub fn is_complete(code: &str, length: usize) -> bool {
    char_len(code) == length
}
