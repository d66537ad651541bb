use pin_field::{
    KeyInput, MemorySlots, PinField, PinFieldConfig, PinFieldError, SlotHost, Validator,
};
use pretty_assertions::assert_eq;

/// A host implementing only the required methods.
#[derive(Debug, Default)]
struct BareSlots {
    values: Vec<String>,
    focused: Option<usize>,
}

impl BareSlots {
    fn new(len: usize) -> Self {
        Self {
            values: vec![String::new(); len],
            focused: None,
        }
    }
}

impl SlotHost for BareSlots {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn value(&self, idx: usize) -> String {
        self.values[idx].clone()
    }

    fn set_value(&mut self, idx: usize, val: &str) {
        self.values[idx] = val.to_string();
    }

    fn focus(&mut self, idx: usize) {
        self.focused = Some(idx);
    }

    fn set_invalid(&mut self, _idx: usize, _invalid: bool) {}
}

#[test]
fn test_minimal_host_uses_default_hooks() {
    let config = PinFieldConfig::new(3).unwrap();
    let mut field = PinField::new(config, BareSlots::new(3)).unwrap();

    field.handle_paste(0, "xyz").unwrap();

    assert_eq!(field.code(), "xyz");
    assert!(field.is_complete());
    assert_eq!(field.host().focused, Some(2));
}

#[test]
fn test_slot_count_mismatch_is_rejected() {
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
fn test_out_of_range_index_is_an_error() {
    let config = PinFieldConfig::new(2).unwrap();
    let mut field = PinField::new(config, MemorySlots::new(2)).unwrap();

    let expected = PinFieldError::InvalidIndex { idx: 2, length: 2 };
    assert_eq!(
        field.handle_key_down(2, KeyInput::new('1')).unwrap_err(),
        expected
    );
    assert_eq!(field.handle_key_up(2).unwrap_err(), expected);
    assert_eq!(field.handle_paste(2, "1").unwrap_err(), expected);
    assert_eq!(field.host().values(), vec!["", ""]);
}

#[test]
fn test_autofocus_focuses_first_cell_on_attach() {
    let config = PinFieldConfig::new(3).unwrap().with_autofocus(true);
    let field = PinField::new(config, MemorySlots::new(3)).unwrap();
    assert_eq!(field.host().focus_history(), &[0]);

    let config = PinFieldConfig::new(3).unwrap();
    let field = PinField::new(config, MemorySlots::new(3)).unwrap();
    assert!(field.host().focus_history().is_empty());
}

#[test]
fn test_disabled_field_ignores_input_until_enabled() {
    let config = PinFieldConfig::new(2)
        .unwrap()
        .with_validator(Validator::numeric())
        .with_disabled(true);
    let mut field = PinField::new(config, MemorySlots::new(2)).unwrap();
    assert!(field.host().is_disabled());

    field.handle_key_down(0, KeyInput::new('4')).unwrap();
    field.handle_paste(0, "12").unwrap();
    assert_eq!(field.code(), "");

    field.set_disabled(false);
    assert!(!field.host().is_disabled());
    field.handle_paste(0, "12").unwrap();
    assert_eq!(field.code(), "12");
    assert!(field.host().is_completed());
}
