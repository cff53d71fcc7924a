use super::*;
use crate::net::api::{API_BASE, forced_logout_channel};
use futures::executor::block_on;

fn test_client() -> ApiClient {
    let (tx, _rx) = forced_logout_channel();
    ApiClient::new(API_BASE, tx)
}

#[test]
fn current_user_check_absorbs_transport_failure() {
    // The native stub fails like a network error; the check must resolve to
    // "no session" rather than surface an error.
    assert!(block_on(fetch_current_user(&test_client())).is_none());
}

#[test]
fn login_propagates_the_failure_to_the_caller() {
    let credentials = Credentials {
        login: "alice".to_owned(),
        passwd: "secret1".to_owned(),
    };
    let err = block_on(login(&test_client(), &credentials)).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[test]
fn logout_propagates_the_failure_to_the_caller() {
    let err = block_on(logout(&test_client())).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
