use super::*;

#[test]
fn finds_value_among_other_cookies() {
    let cookies = "theme=dark; csrf_access_token=tok-123; lang=en";
    assert_eq!(cookie_value(cookies, CSRF_COOKIE), Some("tok-123".to_owned()));
}

#[test]
fn finds_value_at_start_of_string() {
    assert_eq!(cookie_value("csrf_access_token=abc", CSRF_COOKIE), Some("abc".to_owned()));
}

#[test]
fn missing_cookie_yields_none() {
    assert_eq!(cookie_value("theme=dark; lang=en", CSRF_COOKIE), None);
    assert_eq!(cookie_value("", CSRF_COOKIE), None);
}

#[test]
fn name_must_match_exactly() {
    // A suffix match would leak a different cookie's value.
    assert_eq!(cookie_value("xcsrf_access_token=evil", CSRF_COOKIE), None);
}

#[test]
fn value_may_contain_equals_signs() {
    assert_eq!(cookie_value("csrf_access_token=a=b", CSRF_COOKIE), Some("a=b".to_owned()));
}
