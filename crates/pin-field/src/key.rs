//! Key representation.
//!
//! Keys arrive as W3C `KeyboardEvent.key` names (`"a"`, `"ArrowLeft"`, `"Unidentified"`, ...).
//! [`Key`] lifts the names the reducer cares about into variants and keeps everything else as
//! text, so validation decides what happens to it.

use std::fmt;

/// Keys that never reach the reducer, whatever the modifier state.
pub const IGNORED_META_KEYS: [&str; 6] = ["Alt", "Control", "Enter", "Meta", "Shift", "Tab"];

/// A key as seen by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// The input method could not identify the key (common on virtual keyboards).
    Unidentified,
    /// A dead (diacritic compose) key.
    Dead,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Any other key name, including printable characters.
    Other(String),
}

impl Key {
    /// Parse a `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Unidentified" => Key::Unidentified,
            "Dead" => Key::Dead,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            other => Key::Other(other.to_string()),
        }
    }

    /// Build a key from a typed character.
    pub fn from_char(ch: char) -> Self {
        Key::Other(ch.to_string())
    }

    /// The key name, as it would appear in `KeyboardEvent.key`.
    pub fn name(&self) -> &str {
        match self {
            Key::Unidentified => "Unidentified",
            Key::Dead => "Dead",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Other(name) => name,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        Key::from_char(ch)
    }
}

/// Modifier state reported with a key-down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control held.
    pub ctrl: bool,
    /// Alt / Option held.
    pub alt: bool,
    /// Meta / Command / Super held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns `true` if any chord modifier is held.
    pub fn any(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// A raw key-down as delivered by the host, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held while the key was pressed.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A key-down without modifiers.
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifier state.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` if this key-down must be dropped before it becomes an action.
    ///
    /// Modifier chords (Ctrl/Alt/Meta) belong to the host (copy, paste, shortcuts) and
    /// bare modifier or navigation keys carry no character.
    pub fn is_ignored(&self) -> bool {
        self.modifiers.any() || IGNORED_META_KEYS.contains(&self.key.name())
    }
}
