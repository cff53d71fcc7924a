//! Auth service: the three session endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin wrappers over `ApiClient` so the session controller never deals in
//! HTTP shapes. The server manages the auth cookie out of band; nothing is
//! stored locally here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, ApiError, LOGIN_ENDPOINT};
use super::types::{Credentials, CurrentUser, LoginResponse};

const LOGOUT_ENDPOINT: &str = "/logout";
const ME_ENDPOINT: &str = "/me";

/// Sign in with `credentials` via `POST /login`.
///
/// On success the server sets the HttpOnly auth cookie and the readable
/// anti-forgery cookie; the returned identity fields are all this function
/// hands back.
///
/// # Errors
///
/// `ApiError::Status` carries the structured 401/422 payload so the login
/// form can render message and field errors.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    api.post_json(LOGIN_ENDPOINT, credentials).await
}

/// Sign out server-side via `POST /logout`.
///
/// Best-effort: the caller clears local session state whether or not this
/// succeeds.
///
/// # Errors
///
/// Propagates the transport failure for the caller to log.
pub async fn logout(api: &ApiClient) -> Result<(), ApiError> {
    api.post_empty(LOGOUT_ENDPOINT).await
}

/// Ask the server who the current auth cookie belongs to, via `GET /me`.
///
/// A missing or rejected session is an expected outcome, not an error:
/// authentication rejections resolve to `None`. Any other failure also
/// resolves to `None` but is logged distinctly for diagnosis.
pub async fn fetch_current_user(api: &ApiClient) -> Option<CurrentUser> {
    match api.get_json::<CurrentUser>(ME_ENDPOINT).await {
        Ok(user) => Some(user),
        Err(ApiError::Status {
            status: 401 | 422, ..
        }) => {
            log::info!("no active session or token is invalid");
            None
        }
        Err(err) => {
            log::error!("current-user check failed: {err}");
            None
        }
    }
}
