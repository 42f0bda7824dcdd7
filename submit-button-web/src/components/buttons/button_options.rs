use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::components::icons::ButtonIcon;
use crate::vars::{DEFAULT_LABEL, DEFAULT_LOADING_LABEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonError {
    InvalidVariant(String),
    InvalidSize(String),
}

impl fmt::Display for ButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonError::InvalidVariant(value) => write!(
                f,
                "Invalid button variant '{}', expected one of: primary, \
                 success, danger, warning, info",
                value
            ),
            ButtonError::InvalidSize(value) => write!(
                f,
                "Invalid button size '{}', expected one of: small, normal, \
                 medium, large",
                value
            ),
        }
    }
}

impl std::error::Error for ButtonError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
    Warning,
    Info,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Success,
        ButtonVariant::Danger,
        ButtonVariant::Warning,
        ButtonVariant::Info,
    ];

    // keep the full class names in one place so css purging tools find them
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "is-primary",
            ButtonVariant::Success => "is-success",
            ButtonVariant::Danger => "is-danger",
            ButtonVariant::Warning => "is-warning",
            ButtonVariant::Info => "is-info",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ButtonVariant::Primary),
            "success" => Ok(ButtonVariant::Success),
            "danger" => Ok(ButtonVariant::Danger),
            "warning" => Ok(ButtonVariant::Warning),
            "info" => Ok(ButtonVariant::Info),
            _ => Err(ButtonError::InvalidVariant(s.to_string())),
        }
    }
}

impl TryFrom<String> for ButtonVariant {
    type Error = ButtonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ButtonSize {
    Small,
    #[default]
    Normal,
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Small,
        ButtonSize::Normal,
        ButtonSize::Medium,
        ButtonSize::Large,
    ];

    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "is-small",
            ButtonSize::Normal => "is-normal",
            ButtonSize::Medium => "is-medium",
            ButtonSize::Large => "is-large",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = ButtonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(ButtonSize::Small),
            "normal" => Ok(ButtonSize::Normal),
            "medium" => Ok(ButtonSize::Medium),
            "large" => Ok(ButtonSize::Large),
            _ => Err(ButtonError::InvalidSize(s.to_string())),
        }
    }
}

impl TryFrom<String> for ButtonSize {
    type Error = ButtonError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Flags owned by the caller. The button never mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub loading: bool,
    pub disabled: bool,
}

impl ButtonState {
    pub fn new(loading: bool, disabled: bool) -> Self {
        Self { loading, disabled }
    }

    pub fn is_interactive(&self) -> bool {
        !(self.loading || self.disabled)
    }
}

/// Everything needed to draw the button for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedButton {
    pub text: String,
    pub icon: ButtonIcon,
    pub class: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmitButtonOptions {
    label: String,
    loading_label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
}

impl Default for SubmitButtonOptions {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            loading_label: DEFAULT_LOADING_LABEL.to_string(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            full_width: false,
        }
    }
}

impl SubmitButtonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_loading_label(mut self, loading_label: &str) -> Self {
        self.loading_label = loading_label.to_string();
        self
    }

    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Builds options from plain strings, rejecting unknown variant or
    /// size names.
    pub fn parse(
        label: &str,
        loading_label: &str,
        variant: &str,
        size: &str,
        full_width: bool,
    ) -> Result<Self, ButtonError> {
        Ok(Self::new()
            .with_label(label)
            .with_loading_label(loading_label)
            .with_variant(variant.parse()?)
            .with_size(size.parse()?)
            .full_width(full_width))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn loading_label(&self) -> &str {
        &self.loading_label
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn size(&self) -> ButtonSize {
        self.size
    }

    pub fn is_full_width(&self) -> bool {
        self.full_width
    }

    pub fn text(&self, state: ButtonState) -> &str {
        if state.loading {
            &self.loading_label
        } else {
            &self.label
        }
    }

    pub fn button_class(&self) -> String {
        let mut classes = vec!["button", self.variant.class(), self.size.class()];
        if self.full_width {
            classes.push("is-fullwidth");
        }
        classes.join(" ")
    }

    pub fn render(&self, state: ButtonState) -> RenderedButton {
        RenderedButton {
            text: self.text(state).to_string(),
            icon: if state.loading {
                ButtonIcon::Spinner
            } else {
                ButtonIcon::Submit
            },
            class: self.button_class(),
            disabled: !state.is_interactive(),
        }
    }

    /// Runs `on_activate` once if the button is interactive in `state`,
    /// otherwise drops the activation. Returns whether it ran.
    pub fn activate<F>(&self, state: ButtonState, on_activate: F) -> bool
    where
        F: FnOnce(),
    {
        if !state.is_interactive() {
            log::debug!("activation of '{}' ignored: {:?}", self.label, state);
            return false;
        }
        on_activate();
        true
    }
}
