//! User-intent actions.

use crate::key::Key;

/// One raw input intent raised by a cell.
///
/// Actions are queued by the input entry points of [`PinField`](crate::PinField) and consumed
/// exactly once by the reducer during the next render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A key was pressed in a cell.
    KeyDown {
        /// Cell index.
        idx: usize,
        /// Pressed key.
        key: Key,
        /// Cell value before the keystroke.
        val: String,
    },
    /// A key was released in a cell.
    KeyUp {
        /// Cell index.
        idx: usize,
        /// Cell value after the keystroke.
        val: String,
    },
    /// Text was pasted into a cell.
    Paste {
        /// Cell index.
        idx: usize,
        /// Pasted text.
        val: String,
    },
}

impl Action {
    /// Index of the cell that raised the action.
    pub fn idx(&self) -> usize {
        match self {
            Action::KeyDown { idx, .. } | Action::KeyUp { idx, .. } | Action::Paste { idx, .. } => {
                *idx
            }
        }
    }
}
