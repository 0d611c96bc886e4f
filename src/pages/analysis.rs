//! AI analysis page: fetch history, request an analysis, render markdown.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::sidebar::Sidebar;
use crate::net::api::ApiClient;
use crate::net::error::AuthError;
use crate::net::types::{AnalysisResponse, AnalysisUsage};
use crate::state::auth::SessionController;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let session = expect_context::<SessionController>();
    let api = expect_context::<ApiClient>();

    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<AuthError>);
    let analysis = RwSignal::new(None::<AnalysisResponse>);

    let on_analyze = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);
        analysis.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let outcome = async {
                    let history = api.fetch_workout_history().await?;
                    if history.is_empty() {
                        return Err(AuthError::InvalidInput(
                            "No workout history to analyze yet. Upload a CSV first.".to_owned(),
                        ));
                    }
                    api.analyze_workouts(&history).await
                }
                .await;

                match outcome {
                    Ok(result) => analysis.set(Some(result)),
                    Err(e) => {
                        session.absorb_error(&e);
                        error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session);
        }
    };

    view! {
        <div class="app-layout">
            <Sidebar/>
            <main class="app-layout__content">
                <h1>"Get Swole Analysis"</h1>
                <button class="btn btn--primary" on:click=on_analyze disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Analyze Workout History" }}
                </button>

                {move || {
                    error
                        .get()
                        .map(|e| {
                            let rate_limited = e == AuthError::RateLimited;
                            view! {
                                <div class="error-panel">
                                    <p class="error-message">{e.to_string()}</p>
                                    <Show when=move || rate_limited>
                                        <p class="error-panel__hint">
                                            "This is a temporary limitation, not a problem with "
                                            "your data. Retrying right away will not help."
                                        </p>
                                    </Show>
                                </div>
                            }
                        })
                }}

                {move || {
                    analysis
                        .get()
                        .map(|result| {
                            let rendered = render_markdown_html(&result.analysis);
                            let footer = analysis_footer(result.model.as_deref(), result.usage.as_ref());
                            view! {
                                <section class="analysis">
                                    <div class="analysis__body" inner_html=rendered></div>
                                    <Show when={
                                        let footer = footer.clone();
                                        move || !footer.is_empty()
                                    }>
                                        <p class="analysis__footer">{footer.clone()}</p>
                                    </Show>
                                </section>
                            }
                        })
                }}
            </main>
        </div>
    }
}

/// Render analysis markdown to HTML, dropping any raw HTML the model may
/// have produced.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// One-line provenance footer: model name and token usage, when reported.
fn analysis_footer(model: Option<&str>, usage: Option<&AnalysisUsage>) -> String {
    match (model, usage) {
        (Some(model), Some(usage)) => {
            format!("Generated by {model} ({} tokens)", usage.total_tokens)
        }
        (Some(model), None) => format!("Generated by {model}"),
        (None, Some(usage)) => format!("{} tokens used", usage.total_tokens),
        (None, None) => String::new(),
    }
}
