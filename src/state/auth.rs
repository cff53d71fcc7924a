//! Session state machine and its single-writer controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` lives in a context-provided `RwSignal`; every other module
//! only reads it or calls `Session` operations. The forced-logout channel
//! from `net::api` is consumed here, so the transport layer never touches
//! session fields.
//!
//! The machine is `Initializing → {Authenticated, Anonymous}`, then
//! `Authenticated ⇄ Anonymous` via login/logout. The initial restore runs
//! exactly once per application load and never fails outward: every error
//! is absorbed into the anonymous state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use futures::StreamExt;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::{ApiClient, ApiError, ForcedLogout, ForcedLogoutReceiver, LOGIN_PATH};
use crate::net::auth;
use crate::net::types::{Credentials, CurrentUser, LoginResponse};
use crate::util::browser;

/// Default landing page after login when no guarded target was recorded.
pub const DEFAULT_AFTER_LOGIN: &str = "/issues";

/// Identity of the signed-in user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub user_id: i64,
    pub role_id: i64,
}

impl From<CurrentUser> for SessionUser {
    fn from(user: CurrentUser) -> Self {
        Self {
            user_id: user.user_id,
            role_id: user.role_id,
        }
    }
}

/// Authentication state for the whole application.
///
/// Fields are private so transitions go through the methods below; being
/// authenticated is derived from the identity, never stored separately, so
/// the two cannot drift apart.
///
/// `Default` is the initializing state: loading until the one-shot session
/// restore resolves it.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    user: Option<SessionUser>,
    loading: bool,
    notice: Option<String>,
    redirect_after_login: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            notice: None,
            redirect_after_login: None,
        }
    }
}

impl AuthState {
    /// True iff a session exists.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True only while the initial session restore is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user
    }

    /// Pending user-facing message (e.g. a forced-logout reason).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Initial restore finished, with or without an identity.
    pub(crate) fn restored(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }

    /// Successful login, from any state.
    pub(crate) fn login_succeeded(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Failed login leaves the session anonymous.
    pub(crate) fn login_failed(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Logout (explicit or forced) clears the identity.
    pub(crate) fn cleared(&mut self, notice: Option<String>) {
        self.user = None;
        self.loading = false;
        if notice.is_some() {
            self.notice = notice;
        }
    }

    /// Consume the pending notice.
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Remember where an anonymous user wanted to go.
    pub fn record_redirect(&mut self, path: String) {
        self.redirect_after_login = Some(path);
    }

    /// Target to open after a successful login. One-shot; defaults to the
    /// issues list.
    pub fn take_redirect(&mut self) -> String {
        self.redirect_after_login
            .take()
            .unwrap_or_else(|| DEFAULT_AFTER_LOGIN.to_owned())
    }
}

/// Single writer of [`AuthState`].
///
/// Created once by the app root inside the router; cloned freely by
/// components that need to trigger login or logout. Navigation is injected
/// as a closure so the controller stays independent of router internals.
/// The closure is `Send + Sync` so the controller can live in the Leptos
/// context and in view-tree closures.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<AuthState>,
    api: ApiClient,
    navigate: Arc<dyn Fn(&str, NavigateOptions) + Send + Sync>,
}

impl Session {
    pub fn new(
        state: RwSignal<AuthState>,
        api: ApiClient,
        navigate: impl Fn(&str, NavigateOptions) + Send + Sync + 'static,
    ) -> Self {
        Self {
            state,
            api,
            navigate: Arc::new(navigate),
        }
    }

    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Initial session restore. The app root runs this exactly once per
    /// application load; guarded views stay in the loading placeholder
    /// until it resolves. Never fails outward.
    pub async fn restore(&self) {
        let user = auth::fetch_current_user(&self.api).await;
        browser::set_auth_marker(user.is_some());
        self.state.update(|s| s.restored(user.map(SessionUser::from)));
    }

    /// Attempt a login.
    ///
    /// # Errors
    ///
    /// Propagates the structured `ApiError` so the form can display the
    /// server's message and field-level errors.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        match auth::login(&self.api, credentials).await {
            Ok(response) => {
                let user = SessionUser {
                    user_id: response.user_id,
                    role_id: response.role_id,
                };
                self.state.update(|s| s.login_succeeded(user));
                browser::set_auth_marker(true);
                Ok(response)
            }
            Err(err) => {
                self.state.update(AuthState::login_failed);
                Err(err)
            }
        }
    }

    /// User-initiated logout.
    pub async fn logout(&self) {
        self.perform_full_logout(Some("You have signed out.".to_owned()))
            .await;
    }

    /// Consume forced-logout broadcasts for the lifetime of the app.
    pub async fn listen_forced_logout(self, mut receiver: ForcedLogoutReceiver) {
        while let Some(ForcedLogout { reason }) = receiver.next().await {
            log::info!("forced logout: {reason}");
            self.perform_full_logout(Some(reason)).await;
        }
    }

    /// Shared logout path: best-effort server logout, local clear, notice,
    /// then a replace-navigation to the login view unless already there.
    async fn perform_full_logout(&self, notice: Option<String>) {
        if let Err(err) = auth::logout(&self.api).await {
            log::warn!("server logout failed, clearing local session anyway: {err}");
        }
        self.state.update(|s| s.cleared(notice));
        browser::set_auth_marker(false);
        if browser::current_path().as_deref() != Some(LOGIN_PATH) {
            (self.navigate)(
                LOGIN_PATH,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    }
}
