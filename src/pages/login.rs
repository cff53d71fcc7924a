//! Login page: credential form with server-driven field errors.
//!
//! ERROR HANDLING
//! ==============
//! 401 renders the server message as a general error; 422 renders the
//! per-field `errors` map inline. Client-side checks are a convenience
//! only — the server's validation is authoritative.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::auth::{AuthState, Session};

/// Pre-flight check before the request goes out.
fn validate(login: &str, password: &str) -> Result<Credentials, BTreeMap<String, String>> {
    let mut errors = BTreeMap::new();
    if login.trim().is_empty() {
        errors.insert("login".to_owned(), "Login must not be empty.".to_owned());
    }
    if password.trim().is_empty() {
        errors.insert("passwd".to_owned(), "Password must not be empty.".to_owned());
    }
    if errors.is_empty() {
        Ok(Credentials {
            login: login.trim().to_owned(),
            passwd: password.to_owned(),
        })
    } else {
        Err(errors)
    }
}

/// Login page. On success, navigates to the target the route guard
/// recorded, or to the issues list.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let login_input = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(BTreeMap::<String, String>::new());
    let general_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Forced-logout reason, if one brought the user here.
    let notice = move || auth.with(|s| s.notice().map(ToOwned::to_owned));

    let error_for = move |field: &'static str| field_errors.with(|e| e.get(field).cloned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        field_errors.set(BTreeMap::new());
        general_error.set(String::new());

        let credentials = match validate(&login_input.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&credentials).await {
                    Ok(_) => {
                        let target = auth
                            .try_update(|s| {
                                s.take_notice();
                                s.take_redirect()
                            })
                            .unwrap_or_else(|| "/issues".to_owned());
                        navigate(&target, NavigateOptions::default());
                    }
                    Err(err) => {
                        if let Some(errors) = err.field_errors() {
                            field_errors.set(errors.clone());
                        }
                        general_error.set(err.display_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&credentials, &session, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <Show when=move || notice().is_some()>
                    <p class="login-notice">{move || notice().unwrap_or_default()}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="form-group">
                        "Login"
                        <input
                            type="text"
                            placeholder="Your login"
                            prop:value=move || login_input.get()
                            on:input=move |ev| login_input.set(event_target_value(&ev))
                            disabled=move || busy.get()
                            class:input-error=move || error_for("login").is_some()
                        />
                        <Show when=move || error_for("login").is_some()>
                            <p class="field-error">{move || error_for("login").unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            placeholder="Your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || busy.get()
                            class:input-error=move || error_for("passwd").is_some()
                        />
                        <Show when=move || error_for("passwd").is_some()>
                            <p class="field-error">{move || error_for("passwd").unwrap_or_default()}</p>
                        </Show>
                    </label>
                    <Show when=move || !general_error.get().is_empty()>
                        <p class="error-message">{move || general_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
