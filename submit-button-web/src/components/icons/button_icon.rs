use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIcon {
    Submit,
    Spinner,
}

impl ButtonIcon {
    // Font Awesome classes, loaded next to Bulma in the app shell
    pub fn class(&self) -> &'static str {
        match self {
            ButtonIcon::Submit => "fas fa-paper-plane",
            ButtonIcon::Spinner => "fas fa-spinner fa-pulse",
        }
    }
}

#[component]
pub fn ButtonIconView(#[prop(into)] icon: Signal<ButtonIcon>) -> impl IntoView {
    view! {
        <span class="icon is-small">
            <i class=move || icon.get().class() aria-hidden="true"></i>
        </span>
    }
}
