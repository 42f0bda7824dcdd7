#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    SubmitError(String),
    ValidationError { field: String, details: String },
    SubmitInProgress,
}

impl FormError {
    pub fn validation(field: &str, details: &str) -> Self {
        FormError::ValidationError {
            field: field.to_string(),
            details: details.to_string(),
        }
    }

    /// Message meant for the person filling in the form.
    pub fn details(&self) -> String {
        match self {
            FormError::ValidationError { details, .. } => details.clone(),
            _ => self.to_string(),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::SubmitError(msg) => write!(f, "Submit error: {}", msg),
            FormError::ValidationError { field, details } => {
                write!(f, "Validation error: {} - {}", field, details)
            }
            FormError::SubmitInProgress => {
                write!(f, "A submission is already in progress")
            }
        }
    }
}

impl std::error::Error for FormError {}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::SubmitError(err.to_string())
    }
}
