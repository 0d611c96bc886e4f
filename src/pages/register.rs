//! Registration page driving the sign-up state machine.
//!
//! The form view submits to the credential provider; a
//! confirmation-required outcome swaps in the code form while keeping the
//! entered email. Confirming a code routes to the login page rather than
//! auto-authenticating (see `state::registration`).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::provider::{CredentialProvider, RegisterOutcome};
use crate::state::auth::SessionController;
use crate::state::registration::{POST_CONFIRMATION_ROUTE, RegistrationState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionController>();
    let provider = expect_context::<CredentialProvider>();
    let navigate = use_navigate();

    let flow = RwSignal::new(RegistrationState::Form);
    let email = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let confirm_provider = provider.clone();
    let confirm_navigate = navigate.clone();

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let name_value = name.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || name_value.is_empty() || password_value.is_empty() {
            error.set("Email, name, and password are all required.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let provider = provider.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match provider
                    .register(&email_value, &password_value, &name_value)
                    .await
                {
                    Ok(outcome) => {
                        if let RegisterOutcome::SessionIssued(new_session) = &outcome {
                            session.establish(new_session.clone());
                        }
                        let next = flow.get_untracked().apply_register(&email_value, &outcome);
                        let landed = matches!(outcome, RegisterOutcome::SessionIssued(_));
                        flow.set(next);
                        // Secret and display name do not survive the transition.
                        password.set(String::new());
                        name.set(String::new());
                        if landed {
                            navigate("/dashboard", NavigateOptions::default());
                        }
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&provider, &navigate, &session, &password_value);
        }
    };

    let on_confirm = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(email_value) = flow.get().pending_email().map(str::to_owned) else {
            return;
        };
        let code_value = code.get().trim().to_owned();
        if code_value.is_empty() {
            error.set("Enter the confirmation code from your email.".to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let provider = confirm_provider.clone();
            let navigate = confirm_navigate.clone();
            leptos::task::spawn_local(async move {
                match provider.confirm_registration(&email_value, &code_value).await {
                    Ok(()) => {
                        flow.set(flow.get_untracked().apply_confirmation());
                        navigate(POST_CONFIRMATION_ROUTE, NavigateOptions::default());
                    }
                    Err(e) => error.set(e.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&confirm_provider, &confirm_navigate, &code_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <Show when=move || !error.get().is_empty()>
                    <p class="error-message">{move || error.get()}</p>
                </Show>
                {move || match flow.get() {
                    RegistrationState::PendingConfirmation { email } => view! {
                        <h1>"Confirm Your Account"</h1>
                        <p class="auth-card__subtitle">
                            {format!("We sent a confirmation code to {email}.")}
                        </p>
                        <form class="auth-form" on:submit=on_confirm.clone()>
                            <label class="auth-form__label">
                                "Confirmation Code"
                                <input
                                    class="auth-form__input"
                                    type="text"
                                    prop:value=move || code.get()
                                    on:input=move |ev| code.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Confirming..." } else { "Confirm Account" }}
                            </button>
                        </form>
                    }
                    .into_any(),
                    _ => view! {
                        <h1>"Create an Account"</h1>
                        <form class="auth-form" on:submit=on_register.clone()>
                            <label class="auth-form__label">
                                "Email"
                                <input
                                    class="auth-form__input"
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__label">
                                "Name"
                                <input
                                    class="auth-form__input"
                                    type="text"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="auth-form__label">
                                "Password"
                                <input
                                    class="auth-form__input"
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Creating Account..." } else { "Register" }}
                            </button>
                        </form>
                        <p class="auth-card__footer">
                            "Already have an account? "
                            <A href="/login">"Login here"</A>
                        </p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
