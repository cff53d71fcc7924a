//! Catch-all page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page not-found-page">
            <h1>"Page not found"</h1>
            <p>"The address you followed does not exist."</p>
            <a href="/">"Back to the home page"</a>
        </div>
    }
}
