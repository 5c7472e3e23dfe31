use super::*;

#[test]
fn clamp_limits_both_sides() {
    assert_eq!(clamp(0.2, 0.65, 1.6), 0.65);
    assert_eq!(clamp(3.0, 0.65, 1.6), 1.6);
    assert_eq!(clamp(1.0, 0.65, 1.6), 1.0);
}

#[test]
fn clamp_with_inverted_bounds_does_not_panic() {
    assert_eq!(clamp(5.0, 2.0, 1.0), 2.0);
}

#[test]
fn form_fields_are_editable() {
    for tag in ["INPUT", "textarea", "Select"] {
        assert!(is_editable_tag(tag, false), "{tag}");
    }
}

#[test]
fn content_editable_counts() {
    assert!(is_editable_tag("DIV", true));
}

#[test]
fn plain_elements_are_not_editable() {
    for tag in ["BODY", "BUTTON", "A", "DIV"] {
        assert!(!is_editable_tag(tag, false), "{tag}");
    }
}
