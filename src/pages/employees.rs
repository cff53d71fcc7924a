//! Employee pages: list with role filter, create form, edit form.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::ApiClient;
use crate::net::types::{Employee, NewEmployee, Role, UpdateEmployee};

/// Distinct role names present in `employees`, sorted.
fn role_options(employees: &[Employee]) -> Vec<String> {
    let mut roles: Vec<String> = employees.iter().filter_map(|e| e.role.clone()).collect();
    roles.sort();
    roles.dedup();
    roles
}

/// (value, label) pairs for the role filter dropdown. Both sides carry the
/// role name; they are separate strings because the view consumes each once.
fn role_choices(employees: &[Employee]) -> Vec<(String, String)> {
    role_options(employees)
        .into_iter()
        .map(|role| (role.clone(), role))
        .collect()
}

/// Rows matching the role filter; an empty filter keeps everyone.
fn filter_by_role(employees: &[Employee], role: &str) -> Vec<Employee> {
    if role.is_empty() {
        employees.to_vec()
    } else {
        employees
            .iter()
            .filter(|e| e.role.as_deref() == Some(role))
            .cloned()
            .collect()
    }
}

/// Employee list with a client-side role filter and delete actions.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let employees = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Employee>>("/employees").await }
        }
    });
    let selected_role = RwSignal::new(String::new());
    let action_error = RwSignal::new(String::new());

    let on_delete = {
        let api = api.clone();
        move |id: i64| {
            action_error.set(String::new());
            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.delete(&format!("/employees/{id}")).await {
                        Ok(()) => employees.refetch(),
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
        <div class="page employees-page">
            <header class="page__header">
                <h1>"Employees"</h1>
                <a href="/employees/new" class="btn btn--primary">
                    "Add employee"
                </a>
            </header>
            <Show when=move || !action_error.get().is_empty()>
                <p class="error-message">{move || action_error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading employees..."</p> }>
                {move || {
                    let on_delete = on_delete.clone();
                    employees
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let roles = role_choices(&list);
                                view! {
                                    <div class="employees-page__controls">
                                        <label>
                                            "Filter by role: "
                                            <select on:change=move |ev| {
                                                selected_role.set(event_target_value(&ev));
                                            }>
                                                <option value="">"All roles"</option>
                                                {roles
                                                    .into_iter()
                                                    .map(|(value, label)| {
                                                        view! { <option value=value>{label}</option> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </select>
                                        </label>
                                    </div>
                                    <ul class="record-list">
                                        {move || {
                                            let on_delete = on_delete.clone();
                                            filter_by_role(&list, &selected_role.get())
                                                .into_iter()
                                                .map(|employee| {
                                                    let on_delete = on_delete.clone();
                                                    let id = employee.id;
                                                    view! {
                                                        <li class="record-list__row">
                                                            <a href=format!("/employees/{id}")>
                                                                {format!("{} {}", employee.name, employee.surname)}
                                                            </a>
                                                            <span class="record-list__meta">
                                                                {employee.role.clone().unwrap_or_default()}
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
                                                .collect::<Vec<_>>()
                                        }}
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

/// New-employee form. Server-side 422 field errors render inline.
#[component]
pub fn EmployeeCreatePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let roles = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Role>>("/roles").await }
        }
    });

    let name = RwSignal::new(String::new());
    let surname = RwSignal::new(String::new());
    let role_id = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let telegram_id = RwSignal::new(String::new());
    let login = RwSignal::new(String::new());
    let passwd = RwSignal::new(String::new());
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

        let Ok(role_id) = role_id.get().parse::<i64>() else {
            general_error.set("Pick a role.".to_owned());
            return;
        };
        let optional = |value: String| {
            let value = value.trim().to_owned();
            (!value.is_empty()).then_some(value)
        };
        let payload = NewEmployee {
            name: name.get().trim().to_owned(),
            surname: surname.get().trim().to_owned(),
            role_id,
            phone_number: optional(phone_number.get()),
            telegram_id: optional(telegram_id.get()),
            login: login.get().trim().to_owned(),
            passwd: passwd.get(),
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.post_json::<serde_json::Value, _>("/employees", &payload).await {
                    Ok(_) => navigate("/employees", NavigateOptions::default()),
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

    let text_field = move |label: &'static str,
                          field: &'static str,
                          kind: &'static str,
                          signal: RwSignal<String>| {
        view! {
            <label class="form-group">
                {label}
                <input
                    type=kind
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                    class:input-error=move || error_for(field).is_some()
                />
                <Show when=move || error_for(field).is_some()>
                    <p class="field-error">{move || error_for(field).unwrap_or_default()}</p>
                </Show>
            </label>
        }
    };

    view! {
        <div class="page employee-create-page">
            <h1>"New employee"</h1>
            <form class="record-form" on:submit=on_submit>
                {text_field("Name", "name", "text", name)}
                {text_field("Surname", "surname", "text", surname)}
                <label class="form-group">
                    "Role"
                    <select on:change=move |ev| role_id.set(event_target_value(&ev))>
                        <option value="">"Pick a role"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                roles
                                    .get()
                                    .and_then(Result::ok)
                                    .map(|list| {
                                        list.into_iter()
                                            .map(|role| {
                                                view! {
                                                    <option value=role.id.to_string()>{role.role_name}</option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </select>
                </label>
                {text_field("Phone number", "phone_number", "text", phone_number)}
                {text_field("Telegram", "telegram_id", "text", telegram_id)}
                {text_field("Login", "login", "text", login)}
                {text_field("Password", "passwd", "password", passwd)}
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

/// Employee edit page. The form mounts once the record has loaded; the
/// login is displayed read-only since the server treats it as immutable.
#[component]
pub fn EmployeeEditPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let employee_id = move || params.read().get("id").unwrap_or_default();

    let employee = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            let id = employee_id();
            async move { api.get_json::<Employee>(&format!("/employees/{id}")).await }
        }
    });
    let roles = LocalResource::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_json::<Vec<Role>>("/roles").await }
        }
    });

    view! {
        <div class="page employee-edit-page">
            <a href="/employees">"Back to employees"</a>
            <Suspense fallback=move || view! { <p>"Loading employee..."</p> }>
                {move || {
                    employee
                        .get()
                        .map(|result| match result {
                            Ok(employee) => {
                                view! { <EmployeeEditForm employee=employee roles=roles/> }.into_any()
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

/// Pre-filled edit form for one employee.
#[component]
fn EmployeeEditForm(
    employee: Employee,
    roles: LocalResource<Result<Vec<Role>, crate::net::api::ApiError>>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let id = employee.id;
    let login = employee.login.clone().unwrap_or_default();
    let name = RwSignal::new(employee.name.clone());
    let surname = RwSignal::new(employee.surname.clone());
    let role_id = RwSignal::new(employee.role_id.map(|r| r.to_string()).unwrap_or_default());
    let phone_number = RwSignal::new(employee.phone_number.clone().unwrap_or_default());
    let telegram_id = RwSignal::new(employee.telegram_id.clone().unwrap_or_default());
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

        let Ok(role_id) = role_id.get().parse::<i64>() else {
            general_error.set("Pick a role.".to_owned());
            return;
        };
        let optional = |value: String| {
            let value = value.trim().to_owned();
            (!value.is_empty()).then_some(value)
        };
        let payload = UpdateEmployee {
            name: name.get().trim().to_owned(),
            surname: surname.get().trim().to_owned(),
            role_id,
            phone_number: optional(phone_number.get()),
            telegram_id: optional(telegram_id.get()),
        };

        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api
                    .put_json::<serde_json::Value, _>(&format!("/employees/{id}"), &payload)
                    .await
                {
                    Ok(_) => navigate("/employees", NavigateOptions::default()),
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
            let _ = (id, &payload, &api, &navigate);
            busy.set(false);
        }
    };

    let text_field = move |label: &'static str, field: &'static str, signal: RwSignal<String>| {
        view! {
            <label class="form-group">
                {label}
                <input
                    type="text"
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                    class:input-error=move || error_for(field).is_some()
                />
                <Show when=move || error_for(field).is_some()>
                    <p class="field-error">{move || error_for(field).unwrap_or_default()}</p>
                </Show>
            </label>
        }
    };

    view! {
        <h1>{format!("Edit employee: {login}")}</h1>
        <form class="record-form" on:submit=on_submit>
            {text_field("Name", "name", name)}
            {text_field("Surname", "surname", surname)}
            <label class="form-group">
                "Login"
                <input type="text" prop:value=login.clone() disabled readonly/>
            </label>
            <label class="form-group">
                "Role"
                <select
                    prop:value=move || role_id.get()
                    on:change=move |ev| role_id.set(event_target_value(&ev))
                >
                    <option value="">"Pick a role"</option>
                    <Suspense fallback=|| ()>
                        {move || {
                            roles
                                .get()
                                .and_then(Result::ok)
                                .map(|list| {
                                    list.into_iter()
                                        .map(|role| {
                                            view! {
                                                <option value=role.id.to_string()>{role.role_name}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </select>
            </label>
            {text_field("Phone number", "phone_number", phone_number)}
            {text_field("Telegram", "telegram_id", telegram_id)}
            <Show when=move || !general_error.get().is_empty()>
                <p class="error-message">{move || general_error.get()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}
