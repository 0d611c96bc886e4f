//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome while reading/writing shared state from
//! Leptos context providers.

pub mod sidebar;
pub mod upload_button;
