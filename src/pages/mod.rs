//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The CRUD pages are deliberately thin: fetch through the shared
//! `ApiClient`, render the response, and surface server-side validation
//! verbatim. All session behavior lives in `state::auth` and the guard.

pub mod departments;
pub mod employees;
pub mod home;
pub mod issues;
pub mod login;
pub mod not_found;
