//! Theme preference: stored choice with a system-preference fallback.
//!
//! The choice persists in `localStorage` as `"dark"`/`"light"` and mirrors
//! onto a `data-theme` attribute on `<html>`. SSR paths no-op so server
//! rendering stays deterministic.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "swolept_theme";

/// Resolve the effective theme: stored choice first, then the OS setting.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        match stored.as_deref() {
            Some("dark") => true,
            Some(_) => false,
            None => window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .map_or(false, |mq| mq.matches()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Mirror the theme onto `<html data-theme>`.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if dark { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, persist the explicit choice, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
        }
    }
    next
}
