//! Registration flow state machine.
//!
//! DESIGN
//! ======
//! `Form -> PendingConfirmation -> Confirmed` with a direct
//! `Form -> Confirmed` edge when the backend issues a session immediately.
//! Transitions fire only on provider success; a failed register or confirm
//! leaves the machine where it was and the page re-renders with an error,
//! so the user can resubmit indefinitely.
//!
//! Post-confirmation policy: confirming a code does NOT authenticate the
//! user. The machine reaches `Confirmed` without a session and the page
//! routes to the login form, which keeps both provider flavors observably
//! identical after sign-up.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::provider::RegisterOutcome;

/// Where a confirmed registration sends the user (no auto-login).
pub const POST_CONFIRMATION_ROUTE: &str = "/login";

/// Registration flow states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationState {
    /// Collecting email, password, and display name.
    Form,
    /// Waiting for the emailed confirmation code. Only the identifier
    /// survives the transition; secret and display name are discarded.
    PendingConfirmation { email: String },
    /// Terminal: the account exists and can log in.
    Confirmed,
}

impl RegistrationState {
    /// Apply a successful register call. Only meaningful from `Form`;
    /// later states ignore stray submissions.
    pub fn apply_register(self, email: &str, outcome: &RegisterOutcome) -> Self {
        match (self, outcome) {
            (Self::Form, RegisterOutcome::ConfirmationRequired) => Self::PendingConfirmation {
                email: email.to_owned(),
            },
            (Self::Form, RegisterOutcome::SessionIssued(_)) => Self::Confirmed,
            (state, _) => state,
        }
    }

    /// Apply a successful confirmation-code submission. One-way: only the
    /// `PendingConfirmation` state advances.
    pub fn apply_confirmation(self) -> Self {
        match self {
            Self::PendingConfirmation { .. } => Self::Confirmed,
            state => state,
        }
    }

    /// Identifier retained for the confirmation call, if pending.
    pub fn pending_email(&self) -> Option<&str> {
        match self {
            Self::PendingConfirmation { email } => Some(email),
            _ => None,
        }
    }
}
