#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::ev::MouseEvent;
use leptos::*;
use submit_button_web::api::{sleep, submit};
use submit_button_web::components::forms::{ProfileForm, SignupForm};
use submit_button_web::{
    ButtonSize, ButtonVariant, DemoConfig, FormError, SubmitButton,
    SubmitButtonOptions, SubmitFlow,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Event, EventInit, HtmlButtonElement, HtmlElement, HtmlInputElement,
};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_container() -> HtmlElement {
    let document = document();
    let container: HtmlElement =
        document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn find_button(container: &HtmlElement) -> HtmlButtonElement {
    container
        .query_selector("button")
        .unwrap()
        .expect("button to be rendered")
        .unchecked_into()
}

fn find_input(container: &HtmlElement) -> HtmlInputElement {
    container
        .query_selector("input")
        .unwrap()
        .expect("input to be rendered")
        .unchecked_into()
}

fn help_text(container: &HtmlElement) -> Option<String> {
    container
        .query_selector(".help.is-danger")
        .unwrap()
        .and_then(|help| help.text_content())
        .map(|text| text.trim().to_string())
}

fn fire(input: &HtmlInputElement, event_type: &str) {
    let mut init = EventInit::new();
    init.bubbles(true);
    let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn type_into(input: &HtmlInputElement, value: &str) {
    input.set_value(value);
    fire(input, "input");
}

fn short_delay_config() -> DemoConfig {
    DemoConfig::from_yaml("submit_delay_ms: 50\n").unwrap()
}

fn button_text(button: &HtmlButtonElement) -> String {
    button.text_content().unwrap_or_default().trim().to_string()
}

#[wasm_bindgen_test]
fn test_click_follows_loading_flag() {
    let container = mount_container();
    let loading = create_rw_signal(false);
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);

    mount_to(container.clone(), move || {
        let options = SubmitButtonOptions::new()
            .with_label("Save Changes")
            .with_loading_label("Saving...");
        view! {
            <SubmitButton
                options
                loading=loading
                on_click=move |_: MouseEvent| counter.set(counter.get() + 1)
            />
        }
    });
    let button = find_button(&container);

    assert_eq!(button_text(&button), "Save Changes");
    assert!(!button.disabled());
    button.click();
    assert_eq!(clicks.get(), 1);

    loading.set(true);
    assert!(button.disabled());
    assert_eq!(button_text(&button), "Saving...");
    button.click();
    button.click();
    assert_eq!(clicks.get(), 1);

    loading.set(false);
    assert_eq!(button_text(&button), "Save Changes");
    button.click();
    assert_eq!(clicks.get(), 2);
}

#[wasm_bindgen_test]
fn test_disabled_flag_blocks_clicks() {
    let container = mount_container();
    let disabled = create_rw_signal(true);
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);

    mount_to(container.clone(), move || {
        view! {
            <SubmitButton
                disabled=disabled
                on_click=move |_: MouseEvent| counter.set(counter.get() + 1)
            />
        }
    });
    let button = find_button(&container);

    assert_eq!(button_text(&button), "Submit");
    button.click();
    assert_eq!(clicks.get(), 0);

    disabled.set(false);
    button.click();
    assert_eq!(clicks.get(), 1);
}

#[wasm_bindgen_test]
fn test_variant_and_size_classes() {
    let container = mount_container();

    mount_to(container.clone(), || {
        let options = SubmitButtonOptions::new()
            .with_variant(ButtonVariant::Success)
            .with_size(ButtonSize::Large);
        view! { <SubmitButton options /> }
    });
    let class_list = find_button(&container).class_list();

    assert!(class_list.contains("button"));
    assert!(class_list.contains("is-success"));
    assert!(class_list.contains("is-large"));
    assert!(!class_list.contains("is-primary"));
    assert!(!class_list.contains("is-normal"));
}

#[wasm_bindgen_test]
async fn test_failed_submission_clears_loading() {
    let loading = create_rw_signal(false);
    let flow = SubmitFlow::new(loading);
    let payload = serde_json::json!({ "email": "a@b.com" });

    let result = flow
        .run(submit(&payload, Duration::from_millis(10), true))
        .await;

    assert!(matches!(result, Err(FormError::SubmitError(_))));
    assert!(!loading.get_untracked());
}

#[wasm_bindgen_test]
async fn test_successful_submission_clears_loading() {
    let loading = create_rw_signal(false);
    let flow = SubmitFlow::new(loading);
    let payload = serde_json::json!({ "name": "Jane", "email": "a@b.com" });

    let receipt = flow
        .run(submit(&payload, Duration::from_millis(10), false))
        .await
        .unwrap();

    assert!(!receipt.id.is_empty());
    assert_eq!(receipt.size, payload.to_string().len());
    assert!(!loading.get_untracked());
}

#[wasm_bindgen_test]
fn test_signup_button_follows_email_validity() {
    let container = mount_container();

    mount_to(container.clone(), || {
        provide_context(short_delay_config());
        view! { <SignupForm /> }
    });
    let input = find_input(&container);
    let button = find_button(&container);

    // untouched: no error shown yet
    assert!(!button.disabled());
    assert_eq!(help_text(&container), None);

    type_into(&input, "bad-email");
    fire(&input, "blur");
    assert!(button.disabled());
    assert_eq!(
        help_text(&container).as_deref(),
        Some("Invalid email format")
    );

    type_into(&input, "");
    assert!(button.disabled());
    assert_eq!(help_text(&container).as_deref(), Some("Email is required"));

    type_into(&input, "a@b.com");
    assert!(!button.disabled());
    assert_eq!(help_text(&container), None);
}

#[wasm_bindgen_test]
async fn test_signup_empty_submit_shows_required() {
    let container = mount_container();

    mount_to(container.clone(), || {
        provide_context(short_delay_config());
        view! { <SignupForm /> }
    });
    let button = find_button(&container);

    button.click();
    assert!(button.disabled());
    assert_eq!(help_text(&container).as_deref(), Some("Email is required"));

    // nothing was submitted
    sleep(Duration::from_millis(100)).await;
    assert!(container.query_selector(".notification").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn test_profile_submit_toggles_button() {
    let container = mount_container();

    mount_to(container.clone(), || {
        provide_context(short_delay_config());
        view! { <ProfileForm /> }
    });
    let button = find_button(&container);

    assert_eq!(button_text(&button), "Save Changes");
    button.click();

    sleep(Duration::from_millis(10)).await;
    assert!(button.disabled());
    assert_eq!(button_text(&button), "Saving...");

    sleep(Duration::from_millis(200)).await;
    assert!(!button.disabled());
    assert_eq!(button_text(&button), "Save Changes");
    let notification = container
        .query_selector(".notification.is-success")
        .unwrap()
        .expect("success notification after the request");
    assert!(notification
        .text_content()
        .unwrap_or_default()
        .contains("Changes saved"));
}
