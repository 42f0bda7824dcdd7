mod form_error;
mod input_field;
mod profile_form;
mod signup_form;
mod submit_flow;
mod validation;

pub mod helpers;

pub use form_error::FormError;
pub use input_field::InputField;
pub use profile_form::ProfileForm;
pub use signup_form::SignupForm;
pub use submit_flow::SubmitFlow;
pub use validation::{validate_email, EMAIL_INVALID, EMAIL_REQUIRED};
