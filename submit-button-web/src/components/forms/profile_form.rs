use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::*;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use super::helpers::SubmissionStatusView;
use super::{FormError, InputField, SubmitFlow};
use crate::api::submit;
use crate::base::config::DemoConfig;
use crate::components::buttons::SubmitButton;

#[derive(Debug, Clone, Serialize)]
struct ProfilePayload {
    name: String,
    email: String,
}

/// Form integration: the form owns the loading flag and hands it to the
/// button, which falls through to the form's submit handler.
#[component]
pub fn ProfileForm() -> impl IntoView {
    let config = use_context::<DemoConfig>().unwrap_or_default();
    let delay = config.submit_delay();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let simulate_failure = create_rw_signal(false);
    let loading = create_rw_signal(false);
    let submit_success = create_rw_signal(None::<String>);
    let submit_error = create_rw_signal(None::<String>);
    let flow = SubmitFlow::new(loading);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit_success.set(None);
        submit_error.set(None);

        let payload = ProfilePayload {
            name: name.get_untracked(),
            email: email.get_untracked(),
        };
        let fail = simulate_failure.get_untracked();
        spawn_local(async move {
            match flow.run(submit(&payload, delay, fail)).await {
                Ok(receipt) => {
                    submit_success
                        .set(Some(format!("Changes saved ({})", receipt.id)));
                }
                Err(FormError::SubmitInProgress) => {}
                Err(err) => {
                    error!("Error saving profile: {}", err);
                    submit_error.set(Some(err.details()));
                }
            }
        });
    };

    view! {
        <form class="box" on:submit=on_submit>
            <h2 class="title is-4">"Edit profile"</h2>
            <InputField label="Name" placeholder="Jane Doe" value=name />
            <InputField
                label="Email"
                input_type="email"
                placeholder="jane@example.com"
                value=email
            />
            <div class="field">
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || simulate_failure.get()
                        on:change=move |ev| {
                            simulate_failure.set(event_target_checked(&ev))
                        }
                    />
                    " Simulate a failed request"
                </label>
            </div>
            <div class="field">
                <div class="control">
                    <SubmitButton
                        options=config.profile_button().clone()
                        loading=loading
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
