//! Action reducer.
//!
//! The reducer is the state machine of the field. It owns the only state that outlives a
//! render, the cursor and the pending [`Fallback`], and turns each [`Action`] into a
//! [`Transition`]: the effects to apply and how they combine with effects already queued.
//!
//! # Ordering
//!
//! Actions are reduced in submission order. Effects are produced in application order.
//! A key-down replaces whatever is pending; a key-up (fallback) or a paste appends to it.
//!
//! # Example
//!
//! ```rust
//! use pin_field::{Action, Effect, Key, Reducer, Transition, Validator};
//!
//! let mut reducer = Reducer::new(4, Validator::numeric());
//! let transition = reducer.reduce(Action::KeyDown {
//!     idx: 0,
//!     key: Key::from_char('7'),
//!     val: String::new(),
//! });
//!
//! assert_eq!(reducer.cursor(), 1);
//! assert!(matches!(transition, Transition::Replace(ref effects)
//!     if effects.last() == Some(&Effect::HandleCodeChange)));
//! ```

use crate::action::Action;
use crate::effect::Effect;
use crate::fallback::{Fallback, FallbackOutcome};
use crate::key::Key;
use crate::text::chars;
use crate::validate::Validator;
use std::collections::VecDeque;
use tracing::debug;

/// Index of the cell before `cursor`, clamped to the first cell.
pub fn prev_index(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Index of the cell after `cursor`, clamped to the last cell of a field of `length` cells.
pub fn next_index(cursor: usize, length: usize) -> usize {
    if length == 0 {
        return 0;
    }
    (cursor + 1).min(length - 1)
}

/// How the effects of one action combine with the pending effect queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Discard pending effects and queue these.
    Replace(Vec<Effect>),
    /// Queue these after the pending effects.
    Append(Vec<Effect>),
    /// Leave the queue untouched.
    Keep,
}

impl Transition {
    /// Merge this transition into `queue`.
    pub fn apply_to(self, queue: &mut VecDeque<Effect>) {
        match self {
            Transition::Replace(effects) => {
                queue.clear();
                queue.extend(effects);
            }
            Transition::Append(effects) => queue.extend(effects),
            Transition::Keep => {}
        }
    }

    /// The effects carried by this transition.
    pub fn effects(&self) -> &[Effect] {
        match self {
            Transition::Replace(effects) | Transition::Append(effects) => effects,
            Transition::Keep => &[],
        }
    }
}

/// The field's input state machine.
#[derive(Debug, Clone)]
pub struct Reducer {
    length: usize,
    validator: Validator,
    cursor: usize,
    fallback: Option<Fallback>,
}

impl Reducer {
    /// Create a reducer for a field of `length` cells.
    pub fn new(length: usize, validator: Validator) -> Self {
        Self {
            length,
            validator,
            cursor: 0,
            fallback: None,
        }
    }

    /// Field length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The active cell for arrow-key navigation.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The pending unidentified-key snapshot, if any.
    pub fn fallback(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// The validator used for keys and pastes.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Reduce one action.
    pub fn reduce(&mut self, action: Action) -> Transition {
        match action {
            Action::KeyDown { idx, key, val } => self.key_down(idx, key, &val),
            Action::KeyUp { idx, val } => self.key_up(idx, &val),
            Action::Paste { idx, val } => {
                debug!(idx, val = %val, "action paste");
                self.cursor = idx;
                Transition::Append(self.accept_text(idx, &val))
            }
        }
    }

    fn key_down(&mut self, idx: usize, key: Key, val: &str) -> Transition {
        debug!(idx, key = %key, "action key-down");

        if self.fallback.as_ref().is_some_and(|fb| fb.idx != idx) {
            debug!(idx, "discarding fallback recorded for another cell");
            self.fallback = None;
        }
        self.cursor = idx;

        match key {
            Key::Unidentified => {
                self.fallback = Some(Fallback::new(idx, val));
                Transition::Keep
            }
            Key::Dead => Transition::Replace(vec![
                Effect::SetInputVal {
                    idx,
                    val: String::new(),
                },
                Effect::RejectKey {
                    idx,
                    key: key.name().to_string(),
                },
                Effect::HandleCodeChange,
            ]),
            Key::ArrowLeft => {
                self.cursor = prev_index(idx);
                Transition::Replace(vec![Effect::FocusInput { idx: self.cursor }])
            }
            Key::ArrowRight => {
                self.cursor = next_index(idx, self.length);
                Transition::Replace(vec![Effect::FocusInput { idx: self.cursor }])
            }
            Key::Backspace | Key::Delete => {
                if val.is_empty() {
                    self.cursor = prev_index(idx);
                }
                Transition::Replace(vec![Effect::HandleDelete { idx }, Effect::HandleCodeChange])
            }
            Key::Other(key) => {
                if self.validator.is_allowed(&key) {
                    self.cursor = next_index(idx, self.length);
                    Transition::Replace(vec![
                        Effect::SetInputVal {
                            idx,
                            val: key.clone(),
                        },
                        Effect::ResolveKey { idx, key },
                        Effect::FocusInput { idx: self.cursor },
                        Effect::HandleCodeChange,
                    ])
                } else {
                    Transition::Replace(vec![Effect::RejectKey { idx, key }])
                }
            }
        }
    }

    fn key_up(&mut self, idx: usize, val: &str) -> Transition {
        let Some(fallback) = self.fallback.take() else {
            debug!(idx, "action key-up ignored");
            return Transition::Keep;
        };

        if fallback.idx != idx {
            debug!(idx, recorded = fallback.idx, "action key-up on another cell, fallback dropped");
            return Transition::Keep;
        }

        debug!(idx, prev = %fallback.val, val = %val, "action key-up");
        self.cursor = idx;

        match fallback.resolve(val) {
            FallbackOutcome::Delete { idx } => {
                self.cursor = prev_index(idx);
                Transition::Append(vec![Effect::HandleDelete { idx }, Effect::HandleCodeChange])
            }
            FallbackOutcome::Insert { idx, text } => {
                Transition::Append(self.accept_text(idx, &text))
            }
            FallbackOutcome::Ignore => Transition::Keep,
        }
    }

    /// Paste-style acceptance of `value` starting at cell `idx`.
    ///
    /// All-or-nothing: if any of the first `length` characters is rejected, only the starting
    /// cell is cleared and marked.
    fn accept_text(&mut self, idx: usize, value: &str) -> Vec<Effect> {
        let chars = chars(value);
        let checked = &chars[..chars.len().min(self.length)];

        if !checked.iter().all(|ch| self.validator.is_allowed(ch)) {
            return vec![
                Effect::RejectKey {
                    idx,
                    key: value.to_string(),
                },
                Effect::SetInputVal {
                    idx,
                    val: String::new(),
                },
                Effect::HandleCodeChange,
            ];
        }

        let paste_len = chars.len().min(self.length.saturating_sub(idx));
        let mut effects = Vec::with_capacity(paste_len * 2 + 2);
        for (offset, ch) in chars.iter().take(paste_len).enumerate() {
            effects.push(Effect::SetInputVal {
                idx: idx + offset,
                val: ch.to_string(),
            });
            effects.push(Effect::ResolveKey {
                idx: idx + offset,
                key: ch.to_string(),
            });
        }

        let next_cursor = (idx + paste_len).min(self.length.saturating_sub(1));
        if next_cursor != self.cursor {
            self.cursor = next_cursor;
            effects.push(Effect::FocusInput { idx: next_cursor });
        }
        effects.push(Effect::HandleCodeChange);
        effects
    }
}
