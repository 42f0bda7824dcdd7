use leptos::*;

use crate::components::forms::SignupForm;

#[component]
pub fn ValidationPage() -> impl IntoView {
    view! {
        <div class="content">
            <h1 class="title">"Basic validation"</h1>
            <p>
                "The email is checked for presence and format once the field "
                "loses focus or the form is submitted. From then on the button "
                "stays disabled while the address is invalid."
            </p>
        </div>
        <SignupForm />
    }
}
