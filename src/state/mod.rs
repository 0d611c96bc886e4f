//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session/token pairing consumed by route guards and pages;
//! `registration` is the sign-up state machine driven by the register page.

pub mod auth;
pub mod registration;
