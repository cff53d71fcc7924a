//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read session state from the Leptos context and trigger
//! `Session` operations; none of them mutates session fields directly.

pub mod navigation;
pub mod route_guard;
