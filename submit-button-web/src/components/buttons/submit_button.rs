use leptos::ev::MouseEvent;
use leptos::*;

use super::{ButtonState, SubmitButtonOptions};
use crate::components::icons::ButtonIconView;

/// Form submit button with a loading state.
///
/// `loading` and `disabled` stay owned by the caller. While either one is
/// set the button is disabled, and a click that still reaches it is dropped
/// together with the native form submission. Otherwise `on_click` receives
/// the originating event; without `on_click` the click falls through to the
/// enclosing form.
#[component]
pub fn SubmitButton(
    #[prop(optional)] options: SubmitButtonOptions,
    #[prop(into, optional)] loading: MaybeSignal<bool>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let options = store_value(options);
    let loading = Signal::derive(move || loading.get());
    let disabled = Signal::derive(move || disabled.get());
    let state = move || ButtonState::new(loading.get(), disabled.get());
    let rendered =
        create_memo(move |_| options.with_value(|o| o.render(state())));

    let handle_click = move |ev: MouseEvent| {
        let activated = options.with_value(|o| {
            o.activate(state(), || {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev.clone());
                }
            })
        });
        if !activated {
            ev.prevent_default();
        }
    };

    view! {
        <button
            type="submit"
            class=move || rendered.with(|r| r.class.clone())
            disabled=move || rendered.with(|r| r.disabled)
            aria-busy=move || loading.get().to_string()
            on:click=handle_click
        >
            <ButtonIconView icon=Signal::derive(move || rendered.with(|r| r.icon)) />
            <span>{move || rendered.with(|r| r.text.clone())}</span>
        </button>
    }
}
