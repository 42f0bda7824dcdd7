pub(crate) mod base;
pub(crate) mod routes;
pub(crate) mod vars;

pub mod api;
pub mod app;
pub mod components;

pub use base::config::{ConfigError, DemoConfig};
pub use components::buttons::{
    ButtonError, ButtonSize, ButtonState, ButtonVariant, RenderedButton,
    SubmitButton, SubmitButtonOptions,
};
pub use components::forms::{validate_email, FormError, SubmitFlow};
pub use components::icons::ButtonIcon;
