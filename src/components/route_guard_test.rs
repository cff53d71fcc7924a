use super::*;

#[test]
fn initializing_state_waits() {
    // No redirect while the session restore is in flight.
    assert_eq!(decide(&AuthState::default()), GuardDecision::Wait);
}

#[test]
fn anonymous_state_redirects_to_login() {
    let mut state = AuthState::default();
    state.restored(None);
    assert_eq!(decide(&state), GuardDecision::RedirectToLogin);
}

#[test]
fn authenticated_state_renders() {
    let mut state = AuthState::default();
    state.restored(Some(crate::state::auth::SessionUser { user_id: 1, role_id: 2 }));
    assert_eq!(decide(&state), GuardDecision::Render);
}

#[test]
fn forced_clear_redirects_again() {
    let mut state = AuthState::default();
    state.restored(Some(crate::state::auth::SessionUser { user_id: 1, role_id: 2 }));
    state.cleared(Some("Session expired.".to_owned()));
    assert_eq!(decide(&state), GuardDecision::RedirectToLogin);
}
