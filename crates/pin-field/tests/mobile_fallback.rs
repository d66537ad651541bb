//! Virtual keyboards report `"Unidentified"` on key-down and write into the cell themselves.
//! These tests replay that sequence: key-down, the input method mutating the host, key-up.

use pin_field::{
    KeyInput, MemorySlots, PinEvent, PinField, PinFieldConfig, SlotHost, Validator,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

fn numeric_field(length: usize) -> (PinField<MemorySlots>, Arc<Mutex<Vec<PinEvent>>>) {
    let config = PinFieldConfig::new(length)
        .unwrap()
        .with_validator(Validator::numeric());
    let mut field = PinField::new(config, MemorySlots::new(length)).unwrap();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    field.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    (field, events)
}

/// Key-down "Unidentified", the IME writes `typed`, then key-up.
fn ime_type(field: &mut PinField<MemorySlots>, idx: usize, typed: &str) {
    field
        .handle_key_down(idx, KeyInput::new("Unidentified"))
        .unwrap();
    field.host_mut().set_value(idx, typed);
    field.handle_key_up(idx).unwrap();
}

#[test]
fn test_unidentified_key_is_recovered_on_key_up() {
    let (mut field, events) = numeric_field(4);

    field
        .handle_key_down(0, KeyInput::new("Unidentified"))
        .unwrap();
    assert!(events.lock().unwrap().is_empty());
    assert!(field.pending_fallback().is_some());

    field.host_mut().set_value(0, "7");
    field.handle_key_up(0).unwrap();

    assert!(field.pending_fallback().is_none());
    assert_eq!(field.host().values(), vec!["7", "", "", ""]);
    assert_eq!(field.host().focused(), Some(1));
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            PinEvent::Resolve { key: "7".into() },
            PinEvent::Change { code: "7".into() },
        ]
    );
}

#[test]
fn test_typing_into_filled_cell_keeps_only_new_char() {
    let (mut field, _events) = numeric_field(4);
    field.handle_paste(0, "1").unwrap();

    // The IME appends to the existing value.
    ime_type(&mut field, 0, "12");

    assert_eq!(field.host().values(), vec!["2", "", "", ""]);
    assert_eq!(field.code(), "2");
}

#[test]
fn test_ime_paste_of_several_digits_spreads_across_cells() {
    let (mut field, events) = numeric_field(4);

    ime_type(&mut field, 0, "4321");

    assert_eq!(field.code(), "4321");
    assert!(field.is_complete());
    assert!(events
        .lock()
        .unwrap()
        .contains(&PinEvent::Complete { code: "4321".into() }));
}

#[test]
fn test_rejected_ime_input_clears_cell() {
    let (mut field, events) = numeric_field(4);

    ime_type(&mut field, 1, "a");

    assert_eq!(field.host().value(1), "");
    assert!(field.host().is_invalid(1));
    assert!(events
        .lock()
        .unwrap()
        .contains(&PinEvent::Reject { key: "a".into() }));
}

#[test]
fn test_unidentified_backspace_on_empty_cell_deletes_backward() {
    let (mut field, _events) = numeric_field(4);
    field.handle_paste(0, "12").unwrap();

    // Empty before, empty after: the key was a backspace.
    field
        .handle_key_down(2, KeyInput::new("Unidentified"))
        .unwrap();
    field.handle_key_up(2).unwrap();

    assert_eq!(field.host().values(), vec!["1", "", "", ""]);
    assert_eq!(field.host().focused(), Some(1));
    assert_eq!(field.code(), "1");
}

#[test]
fn test_ime_clearing_filled_cell_is_ignored() {
    let (mut field, events) = numeric_field(3);
    field.handle_paste(0, "9").unwrap();
    events.lock().unwrap().clear();

    field
        .handle_key_down(0, KeyInput::new("Unidentified"))
        .unwrap();
    field.host_mut().set_value(0, "");
    field.handle_key_up(0).unwrap();

    assert!(events.lock().unwrap().is_empty());
    assert!(field.pending_fallback().is_none());
}

#[test]
fn test_plain_key_up_is_a_noop() {
    let (mut field, events) = numeric_field(3);
    field.handle_key_down(0, KeyInput::new('5')).unwrap();
    events.lock().unwrap().clear();

    field.handle_key_up(0).unwrap();

    assert!(events.lock().unwrap().is_empty());
    assert_eq!(field.code(), "5");
}

#[test]
fn test_fallback_does_not_leak_to_another_cell() {
    let (mut field, events) = numeric_field(3);

    field
        .handle_key_down(0, KeyInput::new("Unidentified"))
        .unwrap();
    field.host_mut().set_value(1, "3");
    field.handle_key_up(1).unwrap();

    assert!(field.pending_fallback().is_none());
    assert!(events.lock().unwrap().is_empty());
}
