//! Networking modules for the facility-management REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the single outbound HTTP path (cookies, anti-forgery header,
//! failure interception), `auth` wraps the three session endpoints, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod auth;
pub mod types;
