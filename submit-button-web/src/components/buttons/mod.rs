mod button_options;
mod submit_button;

pub use button_options::{
    ButtonError, ButtonSize, ButtonState, ButtonVariant, RenderedButton,
    SubmitButtonOptions,
};
pub use submit_button::SubmitButton;
