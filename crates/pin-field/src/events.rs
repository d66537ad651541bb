//! Notifications emitted to the host application.

/// Notification emitted while effects are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PinEvent {
    /// The code was recomputed.
    Change {
        /// Assembled code.
        code: String,
    },
    /// Every cell is filled. Emitted once per transition into the complete state.
    Complete {
        /// Assembled code.
        code: String,
    },
    /// A character was accepted.
    Resolve {
        /// Accepted character.
        key: String,
    },
    /// A character or pasted text was rejected.
    Reject {
        /// Rejected character or text.
        key: String,
    },
}

impl PinEvent {
    /// Event kind, as used by the DOM event names.
    pub fn kind(&self) -> PinEventKind {
        match self {
            PinEvent::Change { .. } => PinEventKind::Change,
            PinEvent::Complete { .. } => PinEventKind::Complete,
            PinEvent::Resolve { .. } => PinEventKind::Resolve,
            PinEvent::Reject { .. } => PinEventKind::Reject,
        }
    }
}

/// Kind of a [`PinEvent`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinEventKind {
    /// See [`PinEvent::Change`].
    Change,
    /// See [`PinEvent::Complete`].
    Complete,
    /// See [`PinEvent::Resolve`].
    Resolve,
    /// See [`PinEvent::Reject`].
    Reject,
}

impl PinEventKind {
    /// Event name: `change`, `complete`, `resolve` or `reject`.
    pub fn name(self) -> &'static str {
        match self {
            PinEventKind::Change => "change",
            PinEventKind::Complete => "complete",
            PinEventKind::Resolve => "resolve",
            PinEventKind::Reject => "reject",
        }
    }
}

/// Subscriber callback type.
pub type PinEventCallback = Box<dyn FnMut(&PinEvent) + Send>;
