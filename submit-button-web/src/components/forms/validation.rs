use std::sync::OnceLock;

use regex::Regex;

use super::FormError;

pub const EMAIL_FIELD: &str = "email";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex")
    })
}

pub fn validate_email(input: &str) -> Result<(), FormError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(FormError::validation(EMAIL_FIELD, EMAIL_REQUIRED));
    }
    if !email_pattern().is_match(email) {
        return Err(FormError::validation(EMAIL_FIELD, EMAIL_INVALID));
    }
    Ok(())
}
