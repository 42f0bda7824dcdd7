use leptos::*;

use crate::components::forms::ProfileForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="content">
            <h1 class="title">"Form integration"</h1>
            <p>
                "The form keeps its own loading flag. It is raised before the "
                "request goes out and cleared once the request settles, "
                "successful or not. While it is raised the button shows a "
                "spinner and ignores clicks."
            </p>
        </div>
        <ProfileForm />
    }
}
