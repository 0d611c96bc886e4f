//! Session state for the current browser user.
//!
//! DESIGN
//! ======
//! `SessionController` is the only code allowed to touch the session store,
//! so the invariant "a token is stored iff `authenticated` is true" holds
//! after every settled action by construction. It is a `Copy` bundle of
//! signal handles created once in `App` and passed through context, which
//! keeps async submit handlers from ever capturing a stale mutator: the
//! handles they close over are the live ones.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::error::AuthError;
use crate::net::types::{Session, User};
use crate::util::session_store;

/// Reactive session state plus the paired store mutations.
#[derive(Clone, Copy, Debug)]
pub struct SessionController {
    authenticated: RwSignal<bool>,
    user: RwSignal<Option<User>>,
}

impl SessionController {
    /// Initialize from the session store, once, at mount.
    ///
    /// A stored token counts as "authenticated" without verification; it is
    /// a client-side cache of "I hold a plausible token", corrected
    /// reactively when a collaborator answers 401.
    pub fn restore() -> Self {
        Self {
            authenticated: RwSignal::new(session_store::get().is_some()),
            user: RwSignal::new(None),
        }
    }

    /// Reactive read of the authenticated flag.
    pub fn is_authenticated(self) -> bool {
        self.authenticated.get()
    }

    /// Identity from the session that authenticated this tab, if any.
    /// Not persisted; a reloaded tab knows only the token.
    pub fn user(self) -> Option<User> {
        self.user.get()
    }

    /// Adopt a freshly issued session: persist the token and flip the flag
    /// in one logical operation.
    pub fn establish(self, session: Session) {
        session_store::set(&session.token);
        self.user.set(Some(session.user));
        self.authenticated.set(true);
    }

    /// User-initiated logout. Idempotent.
    pub fn logout(self) {
        session_store::clear();
        self.user.set(None);
        self.authenticated.set(false);
    }

    /// Forced logout after a collaborator rejected the token.
    pub fn expire(self) {
        #[cfg(feature = "hydrate")]
        log::warn!("stored session rejected by backend; forcing logout");
        self.logout();
    }

    /// Uniform handling for settled API failures: a `SessionExpired` error
    /// tears the session down, everything else leaves it alone.
    pub fn absorb_error(self, err: &AuthError) {
        if err.invalidates_session() {
            self.expire();
        }
    }
}
