pub const DEFAULT_LABEL: &str = "Submit";
pub const DEFAULT_LOADING_LABEL: &str = "Loading...";

pub const APP_TITLE: &str = "Bulma Submit Button";
pub const BULMA_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";
pub const FONTAWESOME_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";
