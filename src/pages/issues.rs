//! Issues page: incident list plus an inline registration form.

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::CreatedIssue;
use crate::net::types::{Department, Issue, NewIssue};

/// Incident list with an inline form for registering new incidents.
#[component]
pub fn IssuesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let issues = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Issue>>("/issues").await }
        }
    });
    let departments = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Department>>("/departments").await }
        }
    });

    let department_id = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let field_errors = RwSignal::new(BTreeMap::<String, String>::new());
    let general_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let error_for = move |field: &'static str| field_errors.with(|e| e.get(field).cloned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        field_errors.set(BTreeMap::new());
        general_error.set(String::new());

        let Ok(department_id_value) = department_id.get().parse::<i64>() else {
            general_error.set("Pick a department.".to_owned());
            return;
        };
        let text = description.get().trim().to_owned();
        if text.is_empty() {
            field_errors.update(|e| {
                e.insert(
                    "description".to_owned(),
                    "Description must not be empty.".to_owned(),
                );
            });
            return;
        }
        let payload = NewIssue {
            department_id: department_id_value,
            description: text,
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.post_json::<CreatedIssue, _>("/issues", &payload).await {
                    Ok(_) => {
                        description.set(String::new());
                        issues.refetch();
                    }
                    Err(err) => {
                        if let Some(errors) = err.field_errors() {
                            field_errors.set(errors.clone());
                        }
                        general_error.set(err.display_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&payload, &api);
            busy.set(false);
        }
    };

    view! {
        <div class="page issues-page">
            <h1>"Issues"</h1>
            <form class="record-form issues-page__form" on:submit=on_submit>
                <label class="form-group">
                    "Department"
                    <select on:change=move |ev| department_id.set(event_target_value(&ev))>
                        <option value="">"Pick a department"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                departments
                                    .get()
                                    .and_then(Result::ok)
                                    .map(|list| {
                                        list.into_iter()
                                            .map(|department| {
                                                view! {
                                                    <option value=department.id.to_string()>
                                                        {department.name}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </select>
                </label>
                <label class="form-group">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                        class:input-error=move || error_for("description").is_some()
                    ></textarea>
                    <Show when=move || error_for("description").is_some()>
                        <p class="field-error">{move || error_for("description").unwrap_or_default()}</p>
                    </Show>
                </label>
                <Show when=move || !general_error.get().is_empty()>
                    <p class="error-message">{move || general_error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Register issue"
                </button>
            </form>
            <Suspense fallback=move || view! { <p>"Loading issues..."</p> }>
                {move || {
                    issues
                        .get()
                        .map(|result| match result {
                            Ok(list) if list.is_empty() => {
                                view! { <p>"No open issues."</p> }.into_any()
                            }
                            Ok(list) => {
                                view! {
                                    <ul class="record-list">
                                        {list
                                            .into_iter()
                                            .map(|issue| {
                                                view! {
                                                    <li class="record-list__row">
                                                        <span class="record-list__title">
                                                            {issue.description.clone()}
                                                        </span>
                                                        <span class="record-list__meta">
                                                            {issue.department.clone().unwrap_or_default()}
                                                        </span>
                                                        <span class="record-list__meta">
                                                            {issue.status.clone().unwrap_or_default()}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! { <p class="error-message">{err.display_message()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
