use super::*;

// Outside the browser the helpers must degrade to absent values, never panic.

#[test]
fn native_path_is_unknown() {
    assert_eq!(current_path(), None);
}

#[test]
fn native_marker_defaults_absent() {
    set_auth_marker(true);
    assert!(!auth_marker());
}
