//! App sidebar: navigation, CSV upload, theme toggle, logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::upload_button::UploadButton;
use crate::state::auth::SessionController;
use crate::util::dark_mode;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionController>();
    let navigate = use_navigate();

    let dark = RwSignal::new(dark_mode::read_preference());

    let on_toggle_theme = move |_| {
        dark.set(dark_mode::toggle(dark.get()));
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"SwolePT"</div>
            <nav class="sidebar__nav">
                <A href="/dashboard">"Dashboard"</A>
                <A href="/history">"Workout History"</A>
                <A href="/analysis">"Get Swole"</A>
            </nav>
            <UploadButton/>
            <div class="sidebar__footer">
                <button class="btn btn--ghost" on:click=on_toggle_theme>
                    {move || if dark.get() { "Light mode" } else { "Dark mode" }}
                </button>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
