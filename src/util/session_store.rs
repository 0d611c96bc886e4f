//! Persistent storage for the session token.
//!
//! DESIGN
//! ======
//! One fixed `localStorage` key holds the raw bearer token; absence of the
//! key is the sole "logged out" signal at process start. The store applies
//! no expiry of its own — staleness surfaces when a collaborator answers
//! 401. Writes are visible to same-process readers immediately; cross-tab
//! visibility follows whatever the browser storage provides.
//!
//! Off-browser (SSR and unit tests) the token lives in a thread-local slot
//! so the store keeps its read-your-writes contract without a DOM.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

const STORAGE_KEY: &str = "swolept_token";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static FALLBACK_SLOT: std::cell::RefCell<Option<String>> =
        const { std::cell::RefCell::new(None) };
}

/// Read the stored token, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_SLOT.with(|slot| slot.borrow().clone())
    }
}

/// Persist a token, replacing any previous one.
pub fn set(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_SLOT.with(|slot| *slot.borrow_mut() = Some(token.to_owned()));
    }
}

/// Remove the stored token. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_SLOT.with(|slot| *slot.borrow_mut() = None);
    }
}
