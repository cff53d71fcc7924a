//! HTTP client wrapper for the facility-management API.
//!
//! Single point of outbound communication: configures the base path, sends
//! cookies on every request, attaches the anti-forgery header on mutating
//! requests, and inspects failed responses for session-ending conditions.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR)
//! and native tests: stubs that fail as network errors, since the API is
//! only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Authentication rejections are published on the forced-logout channel for
//! the session owner to handle; this layer never touches session state and
//! never swallows a failure — the original error always reaches the caller.
//! Network failures are logged only: a transient blip must not evict a
//! valid session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::BTreeMap;

use futures::channel::mpsc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::ErrorBody;
use crate::util::browser;
#[cfg(feature = "hydrate")]
use crate::util::cookie;

/// Default base path for API calls (same-origin deployment).
pub const API_BASE: &str = "/api";

/// Request header carrying the anti-forgery token.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Login view path; failures observed there never trigger a forced logout.
pub const LOGIN_PATH: &str = "/login";

/// Application error code the server uses for unusable anti-forgery tokens.
const INVALID_TOKEN_CODE: &str = "INVALID_TOKEN";

/// Endpoint whose own failures are the login form's to handle.
pub const LOGIN_ENDPOINT: &str = "/login";

/// Signal that the server rejected the session.
///
/// Published by the response interceptor, consumed by the session owner;
/// this is the only coupling between transport and session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForcedLogout {
    /// Human-readable reason shown to the user after the logout completes.
    pub reason: String,
}

/// Sending half of the forced-logout broadcast, held by the client.
pub type ForcedLogoutSender = mpsc::UnboundedSender<ForcedLogout>;

/// Receiving half, owned by the session controller.
pub type ForcedLogoutReceiver = mpsc::UnboundedReceiver<ForcedLogout>;

/// Create the forced-logout broadcast pair.
pub fn forced_logout_channel() -> (ForcedLogoutSender, ForcedLogoutReceiver) {
    mpsc::unbounded()
}

/// Outcome of a failed API call.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The server responded with a non-success status.
    #[error("server returned {status}: {}", body.display_message())]
    Status { status: u16, body: ErrorBody },
    /// The request never produced a response (connectivity, DNS, CORS).
    #[error("network error: {0}")]
    Network(String),
    /// The request could not be constructed.
    #[error("request error: {0}")]
    Request(String),
    /// The response arrived but its body could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code, when the server responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field-level validation errors, when the server supplied them.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            ApiError::Status { body, .. } => body.errors.as_ref(),
            _ => None,
        }
    }

    /// Message suitable for direct display to the user.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Status { body, .. } => body.display_message().to_owned(),
            ApiError::Network(_) => "Could not reach the server. Check your connection.".to_owned(),
            ApiError::Request(_) | ApiError::Decode(_) => "An unexpected error occurred.".to_owned(),
        }
    }
}

/// HTTP methods the client issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Mutating methods must carry the anti-forgery header.
    pub fn needs_csrf(self) -> bool {
        !matches!(self, Method::Get)
    }
}

/// Decide whether a failed response must evict the session.
///
/// Returns the reason to broadcast, or `None` when the failure is the
/// caller's to handle: login attempts, anything observed while already on
/// the login view, and every non-authentication failure.
fn forced_logout_reason(
    status: u16,
    body: &ErrorBody,
    is_login_request: bool,
    on_login_view: bool,
) -> Option<String> {
    if is_login_request || on_login_view {
        return None;
    }
    match status {
        401 => Some(format!(
            "Your session has expired or is invalid ({}). Please sign in again.",
            body.display_message()
        )),
        422 if body.error_code.as_deref() == Some(INVALID_TOKEN_CODE) => Some(format!(
            "There is a problem with your session token ({}). Please sign in again.",
            body.display_message()
        )),
        _ => None,
    }
}

/// Shared HTTP client, provided via Leptos context by the app root.
///
/// Cookies (the session credential) ride along on every request; the
/// anti-forgery token is attached per mutating request.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    forced_logout: ForcedLogoutSender,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, forced_logout: ForcedLogoutSender) -> Self {
        Self {
            base: base.into(),
            forced_logout,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// `GET path`, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError`; interception side effects (forced
    /// logout broadcast, logging) have already run when it surfaces.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let response = self.dispatch(Method::Get, path, None).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    /// `POST path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))?;
            let response = self.dispatch(Method::Post, path, Some(body)).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    /// `PUT path` with a JSON body, decoding the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = serde_json::to_value(body).map_err(|e| ApiError::Request(e.to_string()))?;
            let response = self.dispatch(Method::Put, path, Some(body)).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    /// `POST path` with an empty body, ignoring any response payload.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(Method::Post, path, None).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    /// `DELETE path`, ignoring any response payload.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.dispatch(Method::Delete, path, None).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }

    /// Build, intercept, and send one request; classify its failure.
    #[cfg(feature = "hydrate")]
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let url = self.url(path);
        let mut builder = match method {
            Method::Get => gloo_net::http::Request::get(&url),
            Method::Post => gloo_net::http::Request::post(&url),
            Method::Put => gloo_net::http::Request::put(&url),
            Method::Delete => gloo_net::http::Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);

        if method.needs_csrf() {
            match cookie::csrf_token() {
                Some(token) => builder = builder.header(CSRF_HEADER, &token),
                // Proceed without the header; the server will reject, which
                // is more visible than failing silently client-side.
                None => log::warn!(
                    "anti-forgery cookie missing; {} {path} will likely be rejected",
                    method.as_str()
                ),
            }
        }

        let request = match body {
            Some(json) => builder.json(&json).map_err(|e| ApiError::Request(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Request(e.to_string()))?,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("network failure for {} {path}: {e}", method.as_str());
                return Err(ApiError::Network(e.to_string()));
            }
        };

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        self.intercept_failure(status, &body, path);
        Err(ApiError::Status { status, body })
    }

    /// Response interception: publish a forced logout for authentication
    /// rejections, then let the failure propagate to the caller.
    fn intercept_failure(&self, status: u16, body: &ErrorBody, path: &str) {
        let on_login_view = browser::current_path().as_deref() == Some(LOGIN_PATH);
        let is_login_request = path == LOGIN_ENDPOINT;
        if let Some(reason) = forced_logout_reason(status, body, is_login_request, on_login_view) {
            log::error!(
                "authentication rejected ({status}) on {path}: {}",
                body.display_message()
            );
            self.publish_forced_logout(reason);
        }
    }

    /// Publish on the forced-logout channel. The transport knows nothing
    /// about what the subscriber does with it.
    fn publish_forced_logout(&self, reason: String) {
        if self
            .forced_logout
            .unbounded_send(ForcedLogout { reason })
            .is_err()
        {
            log::warn!("forced-logout receiver dropped; session owner not notified");
        }
    }
}
