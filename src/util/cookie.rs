//! Cookie access for the anti-forgery token.
//!
//! The server sets a readable (non-HttpOnly) cookie alongside the HttpOnly
//! auth cookie; the client echoes its value back as a request header on
//! mutating calls. The token itself has no client-managed lifecycle — it is
//! read fresh per request.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the readable cookie carrying the anti-forgery token.
pub const CSRF_COOKIE: &str = "csrf_access_token";

/// Extract a cookie value from a `document.cookie` style string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// Read the anti-forgery token from `document.cookie`.
///
/// Returns `None` outside the browser or when the cookie is absent.
pub fn csrf_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
        let cookies = document.cookie().ok()?;
        cookie_value(&cookies, CSRF_COOKIE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
