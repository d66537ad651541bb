//! Externally observable effects.

/// A single mutation of the host or a notification, produced by the reducer and applied
/// exactly once, in queue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move focus to a cell.
    FocusInput {
        /// Cell index.
        idx: usize,
    },
    /// Write a (formatted) value into a cell.
    SetInputVal {
        /// Cell index.
        idx: usize,
        /// Raw value; the formatter runs when the effect is applied.
        val: String,
    },
    /// Clear a cell's error mark and report an accepted key.
    ResolveKey {
        /// Cell index.
        idx: usize,
        /// Accepted key.
        key: String,
    },
    /// Set a cell's error mark and report a rejected key or paste.
    RejectKey {
        /// Cell index.
        idx: usize,
        /// Rejected key or pasted text.
        key: String,
    },
    /// Clear a cell, or the previous one when it is already empty.
    HandleDelete {
        /// Cell index.
        idx: usize,
    },
    /// Reassemble the code and notify subscribers.
    HandleCodeChange,
}

impl Effect {
    /// Short kebab-case name, used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::FocusInput { .. } => "focus-input",
            Effect::SetInputVal { .. } => "set-input-val",
            Effect::ResolveKey { .. } => "resolve-key",
            Effect::RejectKey { .. } => "reject-key",
            Effect::HandleDelete { .. } => "handle-delete",
            Effect::HandleCodeChange => "handle-code-change",
        }
    }
}
