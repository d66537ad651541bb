#![warn(missing_docs)]
//! PIN Field - Headless Multi-Cell Code Entry
//!
//! # Overview
//!
//! `pin-field` drives a PIN/OTP style input made of a fixed number of single-character cells
//! that behave like one logical field. It does not render anything: the cells belong to a
//! host (a DOM shell, a terminal UI, a test double) reached through the [`SlotHost`] trait.
//!
//! # Core Features
//!
//! - **Action/Effect Reducer**: raw key, paste and key-up events become queued actions, reduced
//!   into an ordered list of effects
//! - **Validation**: character set, list, regex or predicate, one character at a time
//! - **Paste Handling**: all-or-nothing acceptance spread across the following cells
//! - **Mobile/IME Fallback**: recovers keystrokes reported as `"Unidentified"` from cell values
//! - **Code Assembly**: derived from cell contents on every change, honoring RTL layouts
//! - **Notifications**: `change`, `complete`, `resolve` and `reject` events
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  PinField (entry points, render cycle)      │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Effect applier + notifications             │  ← Side effects
//! ├─────────────────────────────────────────────┤
//! │  Reducer (cursor, fallback, paste)          │  ← State machine
//! ├─────────────────────────────────────────────┤
//! │  Validator / Formatter / Code assembly      │  ← Policies
//! ├─────────────────────────────────────────────┤
//! │  SlotHost (cells owned by the host)         │  ← Collaborator
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use pin_field::{KeyInput, MemorySlots, PinField, PinFieldConfig, Validator};
//!
//! let config = PinFieldConfig::new(4).unwrap().with_validator(Validator::numeric());
//! let mut field = PinField::new(config, MemorySlots::new(4)).unwrap();
//!
//! field.handle_key_down(0, KeyInput::new('1')).unwrap();
//! field.handle_paste(1, "234").unwrap();
//!
//! assert_eq!(field.code(), "1234");
//! assert!(field.is_complete());
//! ```
//!
//! # Module Description
//!
//! - [`key`] - key names, modifiers and the pre-reducer filter
//! - [`validate`] - validation policy
//! - [`format`] - display formatting
//! - [`code`] - code assembly and text direction
//! - [`fallback`] - unidentified-key recovery
//! - [`action`] / [`effect`] - the two queued record types
//! - [`reducer`] - the state machine
//! - [`host`] - the host capability trait and an in-memory host
//! - [`field`] - the field itself
//!
//! # Logging
//!
//! Actions, applied effects and dropped input are reported as `tracing` debug events. The
//! crate never installs a subscriber.

pub mod action;
pub mod code;
pub mod config;
pub mod effect;
pub mod error;
pub mod events;
pub mod fallback;
pub mod field;
pub mod format;
pub mod host;
pub mod key;
pub mod reducer;
mod text;
pub mod validate;

pub use action::Action;
pub use code::{Direction, assemble_code, is_complete};
pub use config::{DEFAULT_LENGTH, PinFieldConfig};
pub use effect::Effect;
pub use error::PinFieldError;
pub use events::{PinEvent, PinEventCallback, PinEventKind};
pub use fallback::{Fallback, FallbackOutcome};
pub use field::PinField;
pub use format::Formatter;
pub use host::{MemorySlots, SlotCell, SlotHost};
pub use key::{IGNORED_META_KEYS, Key, KeyInput, Modifiers};
pub use reducer::{Reducer, Transition, next_index, prev_index};
pub use validate::{DEFAULT_PATTERN, KeyPredicate, Validator};
