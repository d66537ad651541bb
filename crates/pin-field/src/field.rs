//! The PIN field.
//!
//! [`PinField`] wires the pieces together: input entry points turn host events into
//! [`Action`]s, [`render`](PinField::render) reduces them into [`Effect`]s and applies those to
//! the host, emitting [`PinEvent`]s along the way.
//!
//! # Architecture Notes
//!
//! Each render is one synchronous cycle:
//!
//! 1. the action queue is drained oldest first through the [`Reducer`];
//! 2. the resulting effect queue is drained in order, each effect performing exactly one
//!    mutation of the host or one notification.
//!
//! Nothing is interleaved inside a cycle, so the effects of an action are always applied
//! before a later render can move the cursor or claim the fallback.
//!
//! # Example
//!
//! ```rust
//! use pin_field::{KeyInput, MemorySlots, PinEvent, PinField, PinFieldConfig};
//! use std::sync::{Arc, Mutex};
//!
//! let config = PinFieldConfig::new(3).unwrap();
//! let mut field = PinField::new(config, MemorySlots::new(3)).unwrap();
//!
//! let completed = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&completed);
//! field.subscribe(move |event| {
//!     if let PinEvent::Complete { code } = event {
//!         sink.lock().unwrap().push(code.clone());
//!     }
//! });
//!
//! field.handle_paste(0, "a1b").unwrap();
//!
//! assert_eq!(field.code(), "a1b");
//! assert_eq!(completed.lock().unwrap().as_slice(), ["a1b".to_string()]);
//! ```

use crate::action::Action;
use crate::code::{assemble_code, is_complete};
use crate::config::PinFieldConfig;
use crate::effect::Effect;
use crate::error::PinFieldError;
use crate::events::{PinEvent, PinEventCallback};
use crate::fallback::Fallback;
use crate::format::Formatter;
use crate::host::SlotHost;
use crate::key::KeyInput;
use crate::reducer::{Reducer, prev_index};
use std::collections::VecDeque;
use tracing::debug;

/// A multi-cell code-entry field driving a [`SlotHost`].
pub struct PinField<H: SlotHost> {
    /// Cells, owned by the host.
    host: H,
    /// Cursor, fallback and validation.
    reducer: Reducer,
    /// Display formatter for written values.
    formatter: Formatter,
    /// Actions waiting for the next render.
    actions: VecDeque<Action>,
    /// Effects waiting to be applied, in application order.
    effects: VecDeque<Effect>,
    /// Subscribers.
    callbacks: Vec<PinEventCallback>,
    /// Whether the last assembled code filled every cell.
    completed: bool,
    /// Whether input is currently ignored.
    disabled: bool,
}

impl<H: SlotHost> PinField<H> {
    /// Attach a field to `host`.
    ///
    /// Fails if the host does not expose exactly `config.length()` cells.
    pub fn new(config: PinFieldConfig, mut host: H) -> Result<Self, PinFieldError> {
        let (length, validator, formatter, autofocus, disabled) = config.into_parts();
        if host.len() != length {
            return Err(PinFieldError::SlotCountMismatch {
                expected: length,
                actual: host.len(),
            });
        }

        if disabled {
            host.set_disabled(true);
        }
        if autofocus {
            host.focus(0);
        }

        Ok(Self {
            host,
            reducer: Reducer::new(length, validator),
            formatter,
            actions: VecDeque::new(),
            effects: VecDeque::new(),
            callbacks: Vec::new(),
            completed: false,
            disabled,
        })
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.reducer.length()
    }

    /// The host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host, e.g. to simulate an input method writing into a cell.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Detach the field and return its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// The active cell for arrow-key navigation.
    pub fn cursor(&self) -> usize {
        self.reducer.cursor()
    }

    /// The pending unidentified-key snapshot, if any.
    pub fn pending_fallback(&self) -> Option<&Fallback> {
        self.reducer.fallback()
    }

    /// The code currently held by the cells.
    pub fn code(&self) -> String {
        self.assemble()
    }

    /// Whether the last code change filled every cell.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Whether input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable input. Disabling also drops any queued actions.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled == disabled {
            return;
        }
        self.disabled = disabled;
        if disabled {
            self.actions.clear();
        }
        self.host.set_disabled(disabled);
    }

    /// Register a notification callback.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&PinEvent) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Handle a key-down raised by cell `idx`.
    ///
    /// Modifier chords and ignorable keys are dropped before they become actions.
    pub fn handle_key_down(&mut self, idx: usize, input: KeyInput) -> Result<(), PinFieldError> {
        self.check_index(idx)?;
        if input.is_ignored() {
            debug!(idx, key = %input.key, "key-down ignored");
            return Ok(());
        }

        let val = self.host.value(idx);
        self.push_action(Action::KeyDown {
            idx,
            key: input.key,
            val,
        })?;
        self.render();
        Ok(())
    }

    /// Handle a key-up raised by cell `idx`.
    pub fn handle_key_up(&mut self, idx: usize) -> Result<(), PinFieldError> {
        self.check_index(idx)?;
        let val = self.host.value(idx);
        self.push_action(Action::KeyUp { idx, val })?;
        self.render();
        Ok(())
    }

    /// Handle text pasted into cell `idx`.
    pub fn handle_paste(&mut self, idx: usize, text: &str) -> Result<(), PinFieldError> {
        self.push_action(Action::Paste {
            idx,
            val: text.to_string(),
        })?;
        self.render();
        Ok(())
    }

    /// Queue an action for the next [`render`](Self::render).
    ///
    /// Actions are dropped while the field is disabled.
    pub fn push_action(&mut self, action: Action) -> Result<(), PinFieldError> {
        self.check_index(action.idx())?;
        if self.disabled {
            debug!(idx = action.idx(), "field disabled, action dropped");
            return Ok(());
        }
        self.actions.push_back(action);
        Ok(())
    }

    /// Reduce all queued actions, then apply all resulting effects.
    pub fn render(&mut self) {
        self.execute_all();
        self.apply_all();
    }

    fn execute_all(&mut self) {
        while let Some(action) = self.actions.pop_front() {
            self.reducer.reduce(action).apply_to(&mut self.effects);
        }
    }

    fn apply_all(&mut self) {
        while let Some(effect) = self.effects.pop_front() {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        debug!(effect = effect.name(), ?effect, "apply");
        match effect {
            Effect::FocusInput { idx } => self.host.focus(idx),
            Effect::SetInputVal { idx, val } => {
                let val = self.formatter.format(&val);
                self.host.set_value(idx, &val);
            }
            Effect::ResolveKey { idx, key } => {
                self.host.set_invalid(idx, false);
                self.notify(PinEvent::Resolve { key });
            }
            Effect::RejectKey { idx, key } => {
                self.host.set_invalid(idx, true);
                self.notify(PinEvent::Reject { key });
            }
            Effect::HandleDelete { idx } => self.delete_at(idx),
            Effect::HandleCodeChange => self.code_changed(),
        }
    }

    /// Clear cell `idx`; when it is already empty, move back and clear the previous cell.
    fn delete_at(&mut self, idx: usize) {
        let prev_val = self.host.value(idx);
        self.host.set_invalid(idx, false);
        self.host.set_value(idx, "");

        if prev_val.is_empty() {
            let prev_idx = prev_index(idx);
            self.host.focus(prev_idx);
            self.host.set_invalid(prev_idx, false);
            self.host.set_value(prev_idx, "");
        }
    }

    fn code_changed(&mut self) {
        let code = self.assemble();
        debug!(code = %code, "code change");
        self.notify(PinEvent::Change { code: code.clone() });

        if is_complete(&code, self.length()) {
            if !self.completed {
                self.completed = true;
                self.host.set_completed(true);
                self.notify(PinEvent::Complete { code });
            }
        } else if self.completed {
            self.completed = false;
            self.host.set_completed(false);
        }
    }

    fn assemble(&self) -> String {
        let values = (0..self.length()).map(|idx| self.host.value(idx));
        assemble_code(values, self.host.direction())
    }

    fn check_index(&self, idx: usize) -> Result<(), PinFieldError> {
        if idx < self.length() {
            Ok(())
        } else {
            Err(PinFieldError::InvalidIndex {
                idx,
                length: self.length(),
            })
        }
    }

    fn notify(&mut self, event: PinEvent) {
        for callback in &mut self.callbacks {
            callback(&event);
        }
    }
}

impl<H: SlotHost + std::fmt::Debug> std::fmt::Debug for PinField<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinField")
            .field("host", &self.host)
            .field("reducer", &self.reducer)
            .field("formatter", &self.formatter)
            .field("pending_actions", &self.actions.len())
            .field("pending_effects", &self.effects.len())
            .field("subscribers", &self.callbacks.len())
            .field("completed", &self.completed)
            .field("disabled", &self.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySlots;
    use crate::code::Direction;
    use crate::key::Modifiers;
    use std::sync::{Arc, Mutex};

    fn field(length: usize) -> PinField<MemorySlots> {
        let config = PinFieldConfig::new(length).unwrap();
        PinField::new(config, MemorySlots::new(length)).unwrap()
    }

    fn capture(field: &mut PinField<MemorySlots>) -> Arc<Mutex<Vec<PinEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        field.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
        events
    }

    #[test]
    fn test_host_slot_count_must_match() {
        let config = PinFieldConfig::new(4).unwrap();
        let err = PinField::new(config, MemorySlots::new(3)).unwrap_err();
        assert_eq!(
            err,
            PinFieldError::SlotCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_autofocus_focuses_first_cell() {
        let config = PinFieldConfig::new(2).unwrap().with_autofocus(true);
        let field = PinField::new(config, MemorySlots::new(2)).unwrap();
        assert_eq!(field.host().focused(), Some(0));
    }

    #[test]
    fn test_typing_writes_formatted_value() {
        let config = PinFieldConfig::new(3)
            .unwrap()
            .with_formatter(Formatter::uppercase());
        let mut field = PinField::new(config, MemorySlots::new(3)).unwrap();
        let events = capture(&mut field);

        field.handle_key_down(0, KeyInput::new('q')).unwrap();

        assert_eq!(field.host().values(), vec!["Q", "", ""]);
        assert_eq!(field.host().focused(), Some(1));
        // Resolve reports the raw key, change reports the cell contents.
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                PinEvent::Resolve {
                    key: "q".to_string()
                },
                PinEvent::Change {
                    code: "Q".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_modifier_chords_never_reach_reducer() {
        let mut field = field(3);
        let events = capture(&mut field);
        let chord = KeyInput::new('c').with_modifiers(Modifiers {
            meta: true,
            ..Modifiers::NONE
        });
        field.handle_key_down(0, chord).unwrap();
        field.handle_key_down(0, KeyInput::new("Shift")).unwrap();

        assert!(events.lock().unwrap().is_empty());
        assert_eq!(field.host().values(), vec!["", "", ""]);
    }

    #[test]
    fn test_reject_marks_and_resolve_clears_validity() {
        let mut field = field(3);
        field.handle_key_down(1, KeyInput::new('%')).unwrap();
        assert!(field.host().is_invalid(1));

        field.handle_key_down(1, KeyInput::new('7')).unwrap();
        assert!(!field.host().is_invalid(1));
        assert_eq!(field.host().value(1), "7");
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut field = field(3);
        assert_eq!(
            field.handle_paste(3, "1").unwrap_err(),
            PinFieldError::InvalidIndex { idx: 3, length: 3 }
        );
        assert!(field.handle_key_up(9).is_err());
    }

    #[test]
    fn test_disabled_field_ignores_input() {
        let mut field = field(3);
        field.set_disabled(true);
        assert!(field.host().is_disabled());

        field.handle_paste(0, "123").unwrap();
        assert_eq!(field.code(), "");

        field.set_disabled(false);
        field.handle_paste(0, "123").unwrap();
        assert_eq!(field.code(), "123");
        assert!(field.is_complete());
        assert!(field.host().is_completed());
    }

    #[test]
    fn test_completed_mark_follows_code() {
        let mut field = field(2);
        field.handle_paste(0, "12").unwrap();
        assert!(field.host().is_completed());

        field.handle_key_down(1, KeyInput::new("Backspace")).unwrap();
        assert!(!field.is_complete());
        assert!(!field.host().is_completed());
    }

    #[test]
    fn test_direction_is_read_at_code_change() {
        let mut field = field(3);
        field.handle_paste(0, "abc").unwrap();
        assert_eq!(field.code(), "abc");

        field.host_mut().set_direction(Direction::Rtl);
        assert_eq!(field.code(), "cba");
    }
}
