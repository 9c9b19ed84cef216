use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
}

#[test]
fn legacy_esc_value_dismisses() {
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_do_not_dismiss() {
    for key in ["Enter", "Tab", " ", "escape", "x", ""] {
        assert!(!is_dismiss_key(key), "{key:?}");
    }
}
