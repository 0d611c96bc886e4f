//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! Everything environment-dependent is resolved here, once: configuration
//! is read and validated before the router mounts (an invalid config
//! renders an error screen instead of deferring failure to the first
//! request), the single credential provider and API client are built from
//! it, and the session controller is restored from the token store. All
//! three flow to pages through context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::AuthConfig;
use crate::net::api::ApiClient;
use crate::net::provider::CredentialProvider;
use crate::pages::{
    analysis::AnalysisPage, dashboard::DashboardPage, history::HistoryPage, login::LoginPage,
    register::RegisterPage,
};
use crate::state::auth::SessionController;
use crate::util::{dark_mode, guard::Protected, guard::PublicOnly};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("startup configuration invalid: {err}");
            return view! {
                <div class="config-error">
                    <h1>"SwolePT"</h1>
                    <p>{format!("Startup configuration invalid: {err}")}</p>
                </div>
            }
            .into_any();
        }
    };

    let provider = CredentialProvider::from_config(&config);
    let api = ApiClient::from_config(&config);
    let session = SessionController::restore();

    provide_context(provider);
    provide_context(api);
    provide_context(session);

    dark_mode::apply(dark_mode::read_preference());

    view! {
        <Stylesheet id="leptos" href="/pkg/swolept.css"/>
        <Title text="SwolePT"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicOnly><LoginPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <PublicOnly><RegisterPage/></PublicOnly> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("history")
                    view=|| view! { <Protected><HistoryPage/></Protected> }
                />
                <Route
                    path=StaticSegment("analysis")
                    view=|| view! { <Protected><AnalysisPage/></Protected> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
    .into_any()
}
