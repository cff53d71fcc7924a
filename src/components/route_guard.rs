//! Route guard for views that require an established session.
//!
//! Re-evaluated on every navigation to a guarded view; holds no state of
//! its own beyond what it reads from `AuthState`.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::LOGIN_PATH;
use crate::state::auth::AuthState;

/// What to do with a request for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore still running: render a placeholder, never redirect.
    Wait,
    /// No session: send the user to the login view.
    RedirectToLogin,
    /// Established session: render the requested view unchanged.
    Render,
}

/// Pure guard contract. Waiting during the initial restore avoids a
/// redirect flicker for users whose session is about to be restored.
pub fn decide(state: &AuthState) -> GuardDecision {
    if state.is_loading() {
        GuardDecision::Wait
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Wrapper for protected routes.
///
/// Records the originally requested location before redirecting, so a
/// subsequent login can return the user there instead of a default page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        if decide(&auth.get()) == GuardDecision::RedirectToLogin {
            let wanted = location.pathname.get_untracked();
            // Untracked write: recording the target must not re-run this
            // effect or re-render readers.
            auth.update_untracked(|s| s.record_redirect(wanted));
            navigate(
                LOGIN_PATH,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || decide(&auth.get()) == GuardDecision::Render
            fallback=|| view! { <div class="auth-checking">"Checking authentication..."</div> }
        >
            {children()}
        </Show>
    }
}
