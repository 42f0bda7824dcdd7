use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::logging::{error, log};
use leptos::*;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::helpers::SubmissionStatusView;
use super::{validate_email, FormError, InputField, SubmitFlow};
use crate::api::submit;
use crate::base::config::DemoConfig;
use crate::components::buttons::SubmitButton;

#[derive(Debug, Clone, Serialize)]
struct SignupPayload {
    email: String,
}

/// Basic validation: the button stays disabled while the email is invalid
/// and submits through its click callback once it is not.
#[component]
pub fn SignupForm() -> impl IntoView {
    let config = use_context::<DemoConfig>().unwrap_or_default();
    let delay = config.submit_delay();

    let email = create_rw_signal(String::new());
    let touched = create_rw_signal(false);
    let loading = create_rw_signal(false);
    let submit_success = create_rw_signal(None::<String>);
    let submit_error = create_rw_signal(None::<String>);
    let flow = SubmitFlow::new(loading);

    let validation = create_memo(move |_| validate_email(&email.get()));
    let email_error = Signal::derive(move || {
        if touched.get() {
            validation.get().err().map(|err| err.details())
        } else {
            None
        }
    });
    let invalid =
        Signal::derive(move || touched.get() && validation.with(|v| v.is_err()));

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        touched.set(true);
        submit_success.set(None);
        submit_error.set(None);

        if let Err(err) = validation.get_untracked() {
            log!("signup blocked: {}", err);
            return;
        }

        let payload = SignupPayload {
            email: email.get_untracked().trim().to_string(),
        };
        spawn_local(async move {
            match flow.run(submit(&payload, delay, false)).await {
                Ok(_) => {
                    submit_success.set(Some(format!(
                        "Welcome aboard, {}!",
                        payload.email
                    )));
                }
                Err(FormError::SubmitInProgress) => {}
                Err(err) => {
                    error!("Error signing up: {}", err);
                    submit_error.set(Some(err.details()));
                }
            }
        });
    };

    view! {
        <form class="box" on:submit=|ev: SubmitEvent| ev.prevent_default()>
            <h2 class="title is-4">"Sign up"</h2>
            <InputField
                label="Email"
                input_type="email"
                placeholder="you@example.com"
                value=email
                error=email_error
                on_blur=move |_: ()| touched.set(true)
            />
            <div class="field">
                <div class="control">
                    <SubmitButton
                        options=config.signup_button().clone()
                        loading=loading
                        disabled=invalid
                        on_click=on_click
                    />
                </div>
            </div>
            <SubmissionStatusView
                submit_success=submit_success.into()
                submit_error=submit_error.into()
            />
        </form>
    }
}
