//! Terminal-side cells.

use pin_field::{Direction, SlotCell, SlotHost};

/// Cells rendered by the demo. Focus is tracked here because the terminal has no notion of
/// focused widgets.
#[derive(Debug, Clone)]
pub struct TerminalSlots {
    cells: Vec<SlotCell>,
    focused: usize,
    direction: Direction,
    completed: bool,
    disabled: bool,
}

impl TerminalSlots {
    pub fn new(len: usize, direction: Direction) -> Self {
        Self {
            cells: vec![SlotCell::default(); len],
            focused: 0,
            direction,
            completed: false,
            disabled: false,
        }
    }

    pub fn cells(&self) -> &[SlotCell] {
        &self.cells
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Cell indices in on-screen order, left to right.
    pub fn visual_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cells.len()).collect();
        if self.direction == Direction::Rtl {
            order.reverse();
        }
        order
    }
}

impl SlotHost for TerminalSlots {
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
        if idx < self.cells.len() {
            self.focused = idx;
        }
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
