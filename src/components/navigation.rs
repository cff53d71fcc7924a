//! Top navigation bar with session-dependent links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads session state from context and triggers logout through the
//! `Session` controller. Cross-tab presence is best-effort: other tabs'
//! storage writes refresh the link set only, never the session identity.

use leptos::prelude::*;

use crate::state::auth::{AuthState, Session};
use crate::util::browser;

/// Application-wide navigation bar.
#[component]
pub fn Navigation() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();

    let marker = RwSignal::new(browser::auth_marker());
    browser::on_auth_marker_change(move |present| marker.set(present));

    // This tab's session wins; the marker only fills in for tabs that have
    // not (re)checked their own session yet.
    let signed_in = move || {
        let state = auth.get();
        state.is_authenticated() || (!state.is_loading() && marker.get())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move { session.logout().await });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <nav class="app-nav">
            <ul class="app-nav__list">
                <li class="app-nav__item">
                    <a href="/">"Home"</a>
                </li>
                {move || {
                    if signed_in() {
                        let on_logout = on_logout.clone();
                        view! {
                            <li class="app-nav__item">
                                <a href="/employees">"Employees"</a>
                            </li>
                            <li class="app-nav__item">
                                <a href="/departments">"Departments"</a>
                            </li>
                            <li class="app-nav__item">
                                <a href="/issues">"Issues"</a>
                            </li>
                            <li class="app-nav__item">
                                <button class="app-nav__logout" on:click=on_logout>
                                    "Sign out"
                                </button>
                            </li>
                        }
                            .into_any()
                    } else {
                        view! {
                            <li class="app-nav__item">
                                <a href="/login">"Sign in"</a>
                            </li>
                        }
                            .into_any()
                    }
                }}
            </ul>
        </nav>
    }
}
