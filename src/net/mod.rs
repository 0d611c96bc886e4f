//! Networking modules for the backend API and identity providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` turns user credentials into sessions, `api` makes
//! bearer-token calls to the workout collaborators, `error` is the shared
//! failure taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod provider;
pub mod types;
