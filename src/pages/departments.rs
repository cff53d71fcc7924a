//! Department pages: list, create form, detail view.

use std::collections::BTreeMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::ApiClient;
use crate::net::types::{Department, Employee, NewDepartment};

/// Department list with delete actions.
#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let departments = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Department>>("/departments").await }
        }
    });
    let action_error = RwSignal::new(String::new());

    let on_delete = {
        let api = api.clone();
        move |id: i64| {
            action_error.set(String::new());
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.delete(&format!("/departments/{id}")).await {
                        Ok(()) => departments.refetch(),
                        Err(err) => {
                            action_error.set(format!("Could not delete: {}", err.display_message()));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, &api);
            }
        }
    };

    view! {
        <div class="page departments-page">
            <header class="page__header">
                <h1>"Departments"</h1>
                <a href="/departments/new" class="btn btn--primary">
                    "Add department"
                </a>
            </header>
            <Show when=move || !action_error.get().is_empty()>
                <p class="error-message">{move || action_error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading departments..."</p> }>
                {move || {
                    let on_delete = on_delete.clone();
                    departments
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="record-list">
                                        {list
                                            .into_iter()
                                            .map(|department| {
                                                let on_delete = on_delete.clone();
                                                let id = department.id;
                                                view! {
                                                    <li class="record-list__row">
                                                        <a href=format!("/departments/{id}")>
                                                            {department.name.clone()}
                                                        </a>
                                                        <span class="record-list__meta">
                                                            {format!("Floor {}", department.floor)}
                                                        </span>
                                                        <button
                                                            class="btn btn--danger"
                                                            on:click=move |_| on_delete(id)
                                                        >
                                                            "Delete"
                                                        </button>
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

/// New-department form. The responsible employee is picked from the
/// current employee list.
#[component]
pub fn DepartmentCreatePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let employees = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Employee>>("/employees").await }
        }
    });

    let name = RwSignal::new(String::new());
    let floor = RwSignal::new(String::new());
    let responsible = RwSignal::new(String::new());
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

        let Ok(floor) = floor.get().trim().parse::<i32>() else {
            general_error.set("Floor must be a number.".to_owned());
            return;
        };
        let Ok(responsible_employee_id) = responsible.get().parse::<i64>() else {
            general_error.set("Pick a responsible employee.".to_owned());
            return;
        };
        let payload = NewDepartment {
            name: name.get().trim().to_owned(),
            floor,
            responsible_employee_id,
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.post_json::<serde_json::Value, _>("/departments", &payload).await {
                    Ok(_) => navigate("/departments", NavigateOptions::default()),
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
            let _ = (&payload, &api, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="page department-create-page">
            <h1>"New department"</h1>
            <form class="record-form" on:submit=on_submit>
                <label class="form-group">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        class:input-error=move || error_for("name").is_some()
                    />
                    <Show when=move || error_for("name").is_some()>
                        <p class="field-error">{move || error_for("name").unwrap_or_default()}</p>
                    </Show>
                </label>
                <label class="form-group">
                    "Floor"
                    <input
                        type="number"
                        prop:value=move || floor.get()
                        on:input=move |ev| floor.set(event_target_value(&ev))
                        class:input-error=move || error_for("floor").is_some()
                    />
                    <Show when=move || error_for("floor").is_some()>
                        <p class="field-error">{move || error_for("floor").unwrap_or_default()}</p>
                    </Show>
                </label>
                <label class="form-group">
                    "Responsible employee"
                    <select on:change=move |ev| responsible.set(event_target_value(&ev))>
                        <option value="">"Pick an employee"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                employees
                                    .get()
                                    .and_then(Result::ok)
                                    .map(|list| {
                                        list.into_iter()
                                            .map(|employee| {
                                                view! {
                                                    <option value=employee.id.to_string()>
                                                        {format!("{} {}", employee.name, employee.surname)}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </select>
                </label>
                <Show when=move || !general_error.get().is_empty()>
                    <p class="error-message">{move || general_error.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Create"
                </button>
            </form>
        </div>
    }
}

/// Read-only department detail view.
#[component]
pub fn DepartmentDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let department_id = move || params.read().get("id").unwrap_or_default();

    let department = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = department_id();
            async move { api.get_json::<Department>(&format!("/departments/{id}")).await }
        }
    });

    view! {
        <div class="page department-detail-page">
            <a href="/departments">"Back to departments"</a>
            <Suspense fallback=move || view! { <p>"Loading department..."</p> }>
                {move || {
                    department
                        .get()
                        .map(|result| match result {
                            Ok(department) => {
                                let responsible = department
                                    .responsible_employee
                                    .as_ref()
                                    .map_or_else(
                                        || "Unassigned".to_owned(),
                                        |e| format!("{} {}", e.name, e.surname),
                                    );
                                view! {
                                    <h1>{department.name.clone()}</h1>
                                    <dl class="record-detail">
                                        <dt>"Floor"</dt>
                                        <dd>{department.floor}</dd>
                                        <dt>"Responsible employee"</dt>
                                        <dd>{responsible}</dd>
                                    </dl>
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
