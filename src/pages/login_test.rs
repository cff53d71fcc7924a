use super::*;

#[test]
fn validate_requires_both_fields() {
    let errors = validate("", "").unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("login"));
    assert!(errors.contains_key("passwd"));
}

#[test]
fn validate_rejects_whitespace_only_input() {
    let errors = validate("   ", "\t").unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn validate_flags_only_the_missing_field() {
    let errors = validate("alice", "").unwrap_err();
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["passwd"]);
}

#[test]
fn validate_trims_the_login_but_not_the_password() {
    let credentials = validate("  alice  ", "secret1").unwrap();
    assert_eq!(credentials.login, "alice");
    assert_eq!(credentials.passwd, "secret1");
}
