//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic so the interesting decisions stay natively testable.

pub mod browser;
pub mod cookie;
