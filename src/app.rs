//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` owns the session wiring: one `AuthState` signal, one `ApiClient`
//! carrying the forced-logout sender, and one `Session` controller holding
//! the receiver. Everything below gets these through context. The wiring
//! lives in `AppShell` because the `Session` needs `use_navigate`, which is
//! only available inside the `Router`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::navigation::Navigation;
use crate::components::route_guard::RequireAuth;
use crate::net::api::{API_BASE, ApiClient, forced_logout_channel};
use crate::pages::departments::{DepartmentCreatePage, DepartmentDetailPage, DepartmentsPage};
use crate::pages::employees::{EmployeeCreatePage, EmployeeEditPage, EmployeesPage};
use crate::pages::home::HomePage;
use crate::pages::issues::IssuesPage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::state::auth::{AuthState, Session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/facility-client.css"/>
        <Title text="Facility Desk"/>

        <Router>
            <AppShell/>
        </Router>
    }
}

/// Session wiring and the route table.
#[component]
fn AppShell() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let (forced_logout_tx, forced_logout_rx) = forced_logout_channel();
    let api = ApiClient::new(API_BASE, forced_logout_tx);

    let navigate = use_navigate();
    let session = Session::new(auth, api.clone(), move |path, options| {
        navigate(path, options);
    });

    provide_context(auth);
    provide_context(api);
    provide_context(session.clone());

    // One restore per application load, and a listener that lives as long
    // as the app does. Component bodies run once, so neither can repeat.
    #[cfg(feature = "hydrate")]
    {
        let restorer = session.clone();
        leptos::task::spawn_local(async move { restorer.restore().await });
        leptos::task::spawn_local(session.clone().listen_forced_logout(forced_logout_rx));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = forced_logout_rx;

    view! {
        <Navigation/>
        <main class="app-main">
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("employees")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <EmployeesPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("employees"), StaticSegment("new"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <EmployeeCreatePage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("employees"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <EmployeeEditPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("departments")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DepartmentsPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("departments"), StaticSegment("new"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DepartmentCreatePage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("departments"), ParamSegment("id"))
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DepartmentDetailPage/>
                            </RequireAuth>
                        }
                    }
                />
                <Route
                    path=StaticSegment("issues")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <IssuesPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </main>
    }
}
