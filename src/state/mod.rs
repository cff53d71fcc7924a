//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The session is the only process-wide state this application carries;
//! everything else is component-local. `auth` owns the state machine and
//! its single-writer controller.

pub mod auth;
