//! Route guards gating navigation on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two complementary wrappers applied at route definitions in `app`. Both
//! re-evaluate whenever the session controller changes, not just at mount,
//! so a logout on a mounted protected page redirects immediately (and a
//! login on the login page bounces to the dashboard).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::SessionController;

/// Pure decider for [`Protected`]: render iff authenticated.
pub fn protect_allows(authenticated: bool) -> bool {
    authenticated
}

/// Pure decider for [`PublicOnly`]: render iff unauthenticated.
pub fn public_only_allows(authenticated: bool) -> bool {
    !authenticated
}

/// Renders children only for authenticated users; otherwise redirects to
/// the login route.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionController>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !protect_allows(session.is_authenticated()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || protect_allows(session.is_authenticated())>
            {children()}
        </Show>
    }
}

/// Renders children only for unauthenticated users; otherwise redirects to
/// the authenticated landing route.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionController>();
    let navigate = use_navigate();

    Effect::new(move || {
        if !public_only_allows(session.is_authenticated()) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || public_only_allows(session.is_authenticated())>
            {children()}
        </Show>
    }
}
