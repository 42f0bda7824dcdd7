use leptos::*;
use uuid::Uuid;

#[component]
pub fn InputField(
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_string())] input_type: String,
    #[prop(into, optional)] placeholder: String,
    value: RwSignal<String>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
    #[prop(into, optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    // unique per render so the label stays linked to its own input
    let input_id = format!("input-{}", Uuid::new_v4());
    let error_message = error.clone();

    view! {
        <div class="field">
            <label class="label" for=input_id.clone()>{label}</label>
            <div class="control">
                <input
                    id=input_id
                    class=move || {
                        if error.with(|e| e.is_some()) {
                            "input is-danger"
                        } else {
                            "input"
                        }
                    }
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    on:blur=move |_| {
                        if let Some(on_blur) = on_blur {
                            on_blur.call(());
                        }
                    }
                />
            </div>
            { move || error_message.get().map(|message| view! {
                <p class="help is-danger">{message}</p>
            })}
        </div>
    }
}
