use leptos::*;

#[component]
pub fn SubmissionStatusView(
    submit_success: Signal<Option<String>>,
    submit_error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
       { move || if let Some(message) = submit_success.get() {
           view! {
               <div class="notification is-success is-light mt-4">
                   {message}
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}

       { move || if let Some(error) = submit_error.get() {
           view! {
               <div class="notification is-danger is-light mt-4">
                   {error}
               </div>
           }.into_view()
       } else {
           view! { }.into_view()
       }}
    }
}
