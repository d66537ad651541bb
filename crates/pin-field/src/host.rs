//! Host slot array.
//!
//! The field never owns its cells. A host (a DOM shell, a terminal UI, a test double) exposes
//! them through [`SlotHost`]; the core only reads and writes values, moves focus and toggles
//! the per-cell error mark.

use crate::code::Direction;

/// Capability interface over the cells of a field.
///
/// Indices passed by the field are always in `0..self.len()`.
pub trait SlotHost {
    /// Number of cells.
    fn len(&self) -> usize;

    /// Returns `true` if the host has no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current value of a cell.
    fn value(&self, idx: usize) -> String;

    /// Replace the value of a cell.
    fn set_value(&mut self, idx: usize, val: &str);

    /// Move input focus to a cell.
    fn focus(&mut self, idx: usize);

    /// Set or clear the validity-error mark of a cell.
    fn set_invalid(&mut self, idx: usize, invalid: bool);

    /// Ambient layout direction, read each time the code is assembled.
    fn direction(&self) -> Direction {
        Direction::Ltr
    }

    /// Reflect the completed state of the whole field.
    fn set_completed(&mut self, _completed: bool) {}

    /// Reflect the disabled state of the whole field.
    fn set_disabled(&mut self, _disabled: bool) {}
}

/// One cell of a [`MemorySlots`] host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotCell {
    /// Stored value.
    pub value: String,
    /// Validity-error mark.
    pub invalid: bool,
}

/// An in-memory host, for headless use and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    cells: Vec<SlotCell>,
    focused: Option<usize>,
    direction: Direction,
    completed: bool,
    disabled: bool,
    focus_history: Vec<usize>,
}

impl MemorySlots {
    /// Create `len` empty cells.
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![SlotCell::default(); len],
            ..Self::default()
        }
    }

    /// Use the given layout direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Change the layout direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// All cells.
    pub fn cells(&self) -> &[SlotCell] {
        &self.cells
    }

    /// Values of all cells, in index order.
    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.value.as_str()).collect()
    }

    /// Returns `true` if the cell carries the error mark.
    pub fn is_invalid(&self, idx: usize) -> bool {
        self.cells.get(idx).is_some_and(|c| c.invalid)
    }

    /// The focused cell, if any.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Every focus move, in order.
    pub fn focus_history(&self) -> &[usize] {
        &self.focus_history
    }

    /// Last value passed to [`SlotHost::set_completed`].
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Last value passed to [`SlotHost::set_disabled`].
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl SlotHost for MemorySlots {
    fn len(&self) -> usize {
        self.cells.len()
    }

    fn value(&self, idx: usize) -> String {
        self.cells
            .get(idx)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, idx: usize, val: &str) {
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.value = val.to_string();
        }
    }

    fn focus(&mut self, idx: usize) {
        self.focused = Some(idx);
        self.focus_history.push(idx);
    }

    fn set_invalid(&mut self, idx: usize, invalid: bool) {
        if let Some(cell) = self.cells.get_mut(idx) {
            cell.invalid = invalid;
        }
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}
