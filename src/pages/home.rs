//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Public landing page with a pointer into the app.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="page home-page">
            <h1>"Facility Desk"</h1>
            <p>"Track employees, departments, and maintenance issues in one place."</p>
            {move || {
                if auth.with(AuthState::is_authenticated) {
                    view! {
                        <a href="/issues" class="btn btn--primary">
                            "Go to issues"
                        </a>
                    }
                        .into_any()
                } else {
                    view! {
                        <a href="/login" class="btn btn--primary">
                            "Sign in"
                        </a>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
