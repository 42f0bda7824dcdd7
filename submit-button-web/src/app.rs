use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::base::config::DemoConfig;
use crate::routes::{HomePage, ValidationPage};
use crate::vars::{APP_TITLE, BULMA_STYLESHEET, FONTAWESOME_STYLESHEET};

#[component]
pub fn App(#[prop(optional)] config: DemoConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Title text=APP_TITLE />
        <Stylesheet id="bulma" href=BULMA_STYLESHEET />
        <Stylesheet id="fontawesome" href=FONTAWESOME_STYLESHEET />
        <Router>
            <nav class="navbar is-light" role="navigation">
                <div class="navbar-brand">
                    <span class="navbar-item has-text-weight-bold">{APP_TITLE}</span>
                </div>
                <div class="navbar-menu is-active">
                    <div class="navbar-start">
                        <A href="/" class="navbar-item">"Form integration"</A>
                        <A href="/validation" class="navbar-item">"Validation"</A>
                    </div>
                </div>
            </nav>
            <section class="section">
                <div class="container is-max-desktop">
                    <Routes>
                        <Route path="/" view=HomePage />
                        <Route path="/validation" view=ValidationPage />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </div>
            </section>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="notification is-warning">
            "Page not found. "
            <A href="/">"Back to the examples"</A>
        </div>
    }
}
