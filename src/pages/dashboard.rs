//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::auth::SessionController;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionController>();

    let greeting = move || {
        session.user().map_or_else(
            || "Welcome to your SwolePT dashboard.".to_owned(),
            |user| format!("Welcome back, {}.", user.email),
        )
    };

    view! {
        <div class="app-layout">
            <Sidebar/>
            <main class="app-layout__content">
                <h1>"Dashboard"</h1>
                <p>{greeting}</p>
                <p>
                    "Upload a workout CSV from the sidebar, browse your "
                    "history, or request an analysis of your training."
                </p>
            </main>
        </div>
    }
}
