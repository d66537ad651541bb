//! Recovery of keystrokes the input method could not identify.
//!
//! Virtual keyboards and IMEs often report `"Unidentified"` on key-down and write into the
//! cell themselves. The only reliable signal is then the cell value before the key-down and
//! after the key-up; [`Fallback::resolve`] turns that pair into what the user typed.

use crate::text::without_last_char;

/// Snapshot of a cell taken on an unidentified key-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    /// Cell the key-down happened in.
    pub idx: usize,
    /// Cell value before the keystroke.
    pub val: String,
}

/// What a key-up observation means for a pending [`Fallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// An empty cell stayed empty: the key was a backspace.
    Delete {
        /// Cell to delete at.
        idx: usize,
    },
    /// Text appeared in the cell and must go through paste acceptance.
    Insert {
        /// Cell the text starts at.
        idx: usize,
        /// The isolated typed text.
        text: String,
    },
    /// Nothing to do.
    Ignore,
}

impl Fallback {
    /// Create a snapshot.
    pub fn new(idx: usize, val: impl Into<String>) -> Self {
        Self {
            idx,
            val: val.into(),
        }
    }

    /// Compare the snapshot with the value observed on key-up.
    pub fn resolve(&self, new_val: &str) -> FallbackOutcome {
        let old = self.val.as_str();
        match (old.is_empty(), new_val.is_empty()) {
            (true, true) => FallbackOutcome::Delete { idx: self.idx },
            (false, false) => FallbackOutcome::Insert {
                idx: self.idx,
                text: typed_text(old, new_val).to_string(),
            },
            (true, false) => FallbackOutcome::Insert {
                idx: self.idx,
                text: new_val.to_string(),
            },
            (false, true) => FallbackOutcome::Ignore,
        }
    }
}

/// Isolate what was typed into a cell that already held `old`.
fn typed_text<'a>(old: &str, new: &'a str) -> &'a str {
    if let Some(appended) = new.strip_prefix(old) {
        appended
    } else if let Some(prepended) = new.strip_suffix(old) {
        prepended
    } else {
        without_last_char(new)
    }
}
