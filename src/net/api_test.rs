use super::*;
use futures::executor::block_on;
use futures::{FutureExt, StreamExt};

fn body_with_code(code: &str) -> ErrorBody {
    ErrorBody {
        error_code: Some(code.to_owned()),
        ..ErrorBody::default()
    }
}

// =============================================================
// Anti-forgery header policy
// =============================================================

#[test]
fn csrf_required_only_for_mutating_methods() {
    assert!(!Method::Get.needs_csrf());
    assert!(Method::Post.needs_csrf());
    assert!(Method::Put.needs_csrf());
    assert!(Method::Delete.needs_csrf());
}

// =============================================================
// Forced-logout decision
// =============================================================

#[test]
fn unauthorized_response_forces_logout() {
    let reason = forced_logout_reason(401, &ErrorBody::default(), false, false);
    assert!(reason.is_some());
}

#[test]
fn unauthorized_login_attempt_does_not_force_logout() {
    // Bad credentials are the login form's problem, not a session event.
    assert_eq!(forced_logout_reason(401, &ErrorBody::default(), true, false), None);
}

#[test]
fn failures_on_the_login_view_do_not_force_logout() {
    assert_eq!(forced_logout_reason(401, &ErrorBody::default(), false, true), None);
    assert_eq!(
        forced_logout_reason(422, &body_with_code("INVALID_TOKEN"), false, true),
        None
    );
}

#[test]
fn invalid_token_code_forces_logout() {
    let reason = forced_logout_reason(422, &body_with_code("INVALID_TOKEN"), false, false);
    assert!(reason.is_some());
}

#[test]
fn plain_validation_errors_do_not_force_logout() {
    assert_eq!(forced_logout_reason(422, &ErrorBody::default(), false, false), None);
    assert_eq!(
        forced_logout_reason(422, &body_with_code("DUPLICATE_LOGIN"), false, false),
        None
    );
}

#[test]
fn other_server_errors_do_not_force_logout() {
    for status in [400, 403, 404, 500, 503] {
        assert_eq!(
            forced_logout_reason(status, &ErrorBody::default(), false, false),
            None,
            "status {status} must not evict the session"
        );
    }
}

#[test]
fn reason_carries_the_server_message() {
    let body = ErrorBody {
        message: Some("Token has expired".to_owned()),
        ..ErrorBody::default()
    };
    let reason = forced_logout_reason(401, &body, false, false).unwrap();
    assert!(reason.contains("Token has expired"));
}

// =============================================================
// Broadcast plumbing
// =============================================================

#[test]
fn interception_publishes_on_the_channel() {
    let (tx, mut rx) = forced_logout_channel();
    let api = ApiClient::new(API_BASE, tx);

    api.intercept_failure(401, &ErrorBody::default(), "/employees");

    let event = rx.next().now_or_never().flatten().unwrap();
    assert!(event.reason.contains("sign in again"));
}

#[test]
fn login_failures_are_not_broadcast() {
    let (tx, mut rx) = forced_logout_channel();
    let api = ApiClient::new(API_BASE, tx);

    api.intercept_failure(401, &ErrorBody::default(), LOGIN_ENDPOINT);

    assert!(rx.next().now_or_never().is_none());
}

#[test]
fn dropped_receiver_does_not_panic() {
    let (tx, rx) = forced_logout_channel();
    drop(rx);
    let api = ApiClient::new(API_BASE, tx);
    api.intercept_failure(401, &ErrorBody::default(), "/employees");
}

// =============================================================
// Native stubs and error classification
// =============================================================

#[test]
fn native_requests_fail_as_network_errors() {
    let (tx, _rx) = forced_logout_channel();
    let api = ApiClient::new(API_BASE, tx);
    let err = block_on(api.get_json::<serde_json::Value>("/me")).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn status_errors_expose_code_and_field_errors() {
    let mut errors = BTreeMap::new();
    errors.insert("login".to_owned(), "Login must not be empty.".to_owned());
    let err = ApiError::Status {
        status: 422,
        body: ErrorBody {
            errors: Some(errors.clone()),
            ..ErrorBody::default()
        },
    };

    assert_eq!(err.status(), Some(422));
    assert_eq!(err.field_errors(), Some(&errors));
}

#[test]
fn network_errors_have_no_status_and_a_friendly_message() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.field_errors(), None);
    assert!(err.display_message().contains("Could not reach the server"));
}
