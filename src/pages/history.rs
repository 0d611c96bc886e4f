//! Workout history table.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::net::api::ApiClient;
use crate::net::types::WorkoutRecord;
use crate::state::auth::SessionController;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<SessionController>();
    let api = expect_context::<ApiClient>();

    let rows = LocalResource::new(move || {
        let api = api.clone();
        async move { api.fetch_workout_history().await }
    });

    // A 401 on the fetch tears the session down; the route guard then
    // bounces this page to the login form.
    Effect::new(move || {
        if let Some(Err(e)) = rows.get() {
            session.absorb_error(&e);
        }
    });

    view! {
        <div class="app-layout">
            <Sidebar/>
            <main class="app-layout__content">
                <h1>"Workout History"</h1>
                <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                    {move || {
                        rows.get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => view! {
                                    <p>"No workouts yet. Upload a CSV to get started."</p>
                                }
                                    .into_any(),
                                Ok(list) => view! { <HistoryTable rows=list/> }.into_any(),
                                Err(e) => view! {
                                    <p class="error-message">{e.to_string()}</p>
                                }
                                    .into_any(),
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}

#[component]
fn HistoryTable(rows: Vec<WorkoutRecord>) -> impl IntoView {
    view! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Exercise"</th>
                    <th>"Category"</th>
                    <th>"Weight"</th>
                    <th>"Reps"</th>
                    <th>"Distance"</th>
                    <th>"Time"</th>
                    <th>"Comment"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let weight = format_measure(row.weight, row.weight_unit.as_deref());
                        let distance = format_measure(row.distance, row.distance_unit.as_deref());
                        view! {
                            <tr>
                                <td>{row.date}</td>
                                <td>{row.exercise}</td>
                                <td>{row.category}</td>
                                <td>{weight}</td>
                                <td>{row.reps.map_or(String::new(), |r| r.to_string())}</td>
                                <td>{distance}</td>
                                <td>{row.time.unwrap_or_default()}</td>
                                <td>{row.comment.unwrap_or_default()}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Render a value/unit pair, dropping whichever half is missing.
fn format_measure(value: Option<f64>, unit: Option<&str>) -> String {
    match (value, unit) {
        (Some(v), Some(u)) => format!("{v} {u}"),
        (Some(v), None) => v.to_string(),
        (None, _) => String::new(),
    }
}
