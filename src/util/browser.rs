//! Browser environment helpers: current location and the cross-tab
//! auth-presence marker.
//!
//! TRADE-OFFS
//! ==========
//! The marker is best-effort browser-only behavior: other tabs can refresh
//! their navigation chrome from it, but it never carries the session
//! identity itself. SSR and native paths safely no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
const AUTH_MARKER_KEY: &str = "facility_auth_present";

/// Current `window.location.pathname`, or `None` outside the browser.
pub fn current_path() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().pathname().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the auth-presence marker so other open tabs can observe it.
pub fn set_auth_marker(present: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(AUTH_MARKER_KEY, if present { "true" } else { "false" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = present;
    }
}

/// Read the auth-presence marker. `false` outside the browser or when unset.
pub fn auth_marker() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(AUTH_MARKER_KEY) {
                return value == "true";
            }
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Subscribe to cross-tab `storage` events for the auth marker.
///
/// The listener lives for the whole page lifetime; there is no teardown.
pub fn on_auth_marker_change(callback: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let handler = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            if ev.key().as_deref() == Some(AUTH_MARKER_KEY) {
                callback(ev.new_value().as_deref() == Some("true"));
            }
        });
        let _ = window.add_event_listener_with_callback("storage", handler.as_ref().unchecked_ref());
        handler.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = callback;
    }
}
