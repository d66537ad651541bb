//! Headless example
//!
//! Drives a six-digit field through an in-memory host: typing, a rejected key, a paste and
//! a backspace, printing every notification.

use pin_field::{KeyInput, MemorySlots, PinField, PinFieldConfig, Validator};

fn main() {
    println!("=== PIN field, headless ===\n");

    let config = PinFieldConfig::new(6)
        .unwrap()
        .with_validator(Validator::numeric())
        .with_autofocus(true);
    let mut field = PinField::new(config, MemorySlots::new(6)).unwrap();

    field.subscribe(|event| {
        println!("  event: {:?}", event);
    });

    println!("1. Type '4' then '2':");
    field.handle_key_down(0, KeyInput::new('4')).unwrap();
    field.handle_key_down(1, KeyInput::new('2')).unwrap();
    println!("  cells: {:?}\n", field.host().values());

    println!("2. Type 'x' (rejected):");
    field.handle_key_down(2, KeyInput::new('x')).unwrap();
    println!("  cell 2 invalid: {}\n", field.host().is_invalid(2));

    println!("3. Paste '1337' at cell 2:");
    field.handle_paste(2, "1337").unwrap();
    println!("  code: {} (complete: {})\n", field.code(), field.is_complete());

    println!("4. Backspace on the last cell:");
    field.handle_key_down(5, KeyInput::new("Backspace")).unwrap();
    println!("  code: {} (complete: {})", field.code(), field.is_complete());
    println!("  focused: {:?}", field.host().focused());
}
