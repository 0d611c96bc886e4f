//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (submit handlers, resources,
//! forced-logout handling) and delegates shared chrome to `components`.

pub mod analysis;
pub mod dashboard;
pub mod history;
pub mod login;
pub mod register;
