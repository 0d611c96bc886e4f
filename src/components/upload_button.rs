//! CSV upload control for the sidebar.
//!
//! Validates the picked file's content type client-side, then posts it to
//! the upload collaborator with bearer auth. The control disables itself
//! while an upload is outstanding.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::state::auth::SessionController;

#[component]
pub fn UploadButton() -> impl IntoView {
    let session = expect_context::<SessionController>();
    let api = expect_context::<ApiClient>();

    let uploading = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    let on_change = move |_| {
        if uploading.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            if file.type_() != "text/csv" {
                message.set("Please select a CSV file".to_owned());
                return;
            }

            uploading.set(true);
            message.set(String::new());
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.upload_workout_csv(&file).await {
                    Ok(_) => message.set("Workout CSV uploaded.".to_owned()),
                    Err(e) => {
                        session.absorb_error(&e);
                        message.set(e.to_string());
                    }
                }
                uploading.set(false);
                if let Some(input) = input_ref.get_untracked() {
                    input.set_value("");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &session);
        }
    };

    view! {
        <div class="upload">
            <input
                class="upload__input"
                type="file"
                accept=".csv,text/csv"
                node_ref=input_ref
                on:change=on_change
            />
            <button class="btn" on:click=on_pick disabled=move || uploading.get()>
                {move || if uploading.get() { "Uploading..." } else { "Upload Workout CSV" }}
            </button>
            <Show when=move || !message.get().is_empty()>
                <p class="upload__message">{move || message.get()}</p>
            </Show>
        </div>
    }
}
