//! Translation of crossterm key events into `pin-field` key-downs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};
use pin_field::{Key, KeyInput, Modifiers};

/// `KeyboardEvent.key` name for a crossterm key code.
///
/// Codes without a DOM counterpart map to `"Unknown"`, which the validator rejects.
/// `"Unidentified"` is never produced: a terminal always knows which key it reports, and that
/// name would route the key through the field's key-up fallback.
pub fn key_name(code: KeyCode) -> Key {
    let name = match code {
        KeyCode::Char(ch) => return Key::from_char(ch),
        KeyCode::Backspace => "Backspace",
        KeyCode::Delete => "Delete",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Insert => "Insert",
        KeyCode::Enter => "Enter",
        KeyCode::Tab | KeyCode::BackTab => "Tab",
        KeyCode::Esc => "Escape",
        KeyCode::CapsLock => "CapsLock",
        KeyCode::ScrollLock => "ScrollLock",
        KeyCode::NumLock => "NumLock",
        KeyCode::PrintScreen => "PrintScreen",
        KeyCode::Pause => "Pause",
        KeyCode::Menu => "ContextMenu",
        KeyCode::F(n) => return Key::from_name(&format!("F{n}")),
        KeyCode::Modifier(modifier) => modifier_name(modifier),
        _ => "Unknown",
    };
    Key::from_name(name)
}

fn modifier_name(modifier: ModifierKeyCode) -> &'static str {
    match modifier {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => "Shift",
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => "Control",
        ModifierKeyCode::LeftAlt
        | ModifierKeyCode::RightAlt
        | ModifierKeyCode::IsoLevel3Shift
        | ModifierKeyCode::IsoLevel5Shift => "Alt",
        ModifierKeyCode::LeftSuper
        | ModifierKeyCode::RightSuper
        | ModifierKeyCode::LeftHyper
        | ModifierKeyCode::RightHyper
        | ModifierKeyCode::LeftMeta
        | ModifierKeyCode::RightMeta => "Meta",
    }
}

/// Build the field input for a crossterm key event.
pub fn key_input(event: &KeyEvent) -> KeyInput {
    let modifiers = Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        meta: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
    };
    KeyInput::new(key_name(event.code)).with_modifiers(modifiers)
}
