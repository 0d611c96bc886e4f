//! Failure taxonomy for credential-provider and collaborator calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the submit handler or fetch helper that caused
//! it and rendered as a message; nothing here is fatal to the process and
//! nothing is retried automatically. `SessionExpired` is the one variant
//! with a side effect: callers must clear the session through the
//! controller when they see it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Unified auth/API failure type surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Client-side validation failure; never sent to the backend.
    #[error("{0}")]
    InvalidInput(String),
    /// The backend rejected the supplied credentials.
    #[error("{0}")]
    AuthenticationFailed(String),
    /// The backend refused the request for a non-credential reason.
    #[error("{0}")]
    ServerRejected(String),
    /// A collaborator answered 401; the stored token is stale.
    #[error("Session expired. Please log in again.")]
    SessionExpired,
    /// The backend could not be reached at all.
    #[error("Could not reach the server: {0}")]
    NetworkFailure(String),
    /// A downstream service is throttling; discourage immediate retry.
    #[error("The analysis service is rate limited right now. Please wait a few minutes before trying again.")]
    RateLimited,
}

impl AuthError {
    /// Whether the stored session should be discarded in response.
    pub fn invalidates_session(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }
}

/// Pull the `error` field out of a JSON error body, if present.
pub fn server_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|m| m.as_str())
        .map(str::to_owned)
}

/// Classify a non-2xx collaborator response.
///
/// 401 always means the session is stale. Rate-limit text from downstream
/// services (matched case-insensitively) becomes `RateLimited` so callers
/// can present the softer message. Everything else surfaces the server text
/// or the supplied fallback.
pub fn classify_response(status: u16, body: &str, fallback: &str) -> AuthError {
    if status == 401 {
        return AuthError::SessionExpired;
    }
    let message = server_error_message(body).unwrap_or_else(|| fallback.to_owned());
    if is_rate_limit_text(&message) {
        return AuthError::RateLimited;
    }
    AuthError::ServerRejected(message)
}

/// Downstream collaborators report throttling only via error text, so the
/// client pattern-matches it rather than relying on a status code.
pub fn is_rate_limit_text(message: &str) -> bool {
    message.to_ascii_lowercase().contains("rate limit")
}
