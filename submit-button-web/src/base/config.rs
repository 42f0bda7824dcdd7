use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::components::buttons::{
    ButtonSize, ButtonVariant, SubmitButtonOptions,
};

const DEMO_CONFIG: &str = include_str!("../../demo.yaml");
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;

#[derive(Debug)]
pub enum ConfigError {
    Parse(String),
    InvalidLogLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::InvalidLogLevel(level) => {
                write!(f, "Invalid log level: {}", level)
            }
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    log_level: String,
    submit_delay_ms: u64,
    profile_button: SubmitButtonOptions,
    signup_button: SubmitButtonOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
            profile_button: SubmitButtonOptions::new()
                .with_label("Save Changes")
                .with_loading_label("Saving..."),
            signup_button: SubmitButtonOptions::new()
                .with_label("Sign Up")
                .with_loading_label("Signing up...")
                .with_variant(ButtonVariant::Success)
                .with_size(ButtonSize::Large)
                .full_width(true),
        }
    }
}

impl DemoConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_yaml::from_str(yaml)?;
        config.parse_log_level()?;
        Ok(config)
    }

    /// Settings compiled in from `demo.yaml`.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_yaml(DEMO_CONFIG)
    }

    fn parse_log_level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn log_level(&self) -> log::Level {
        self.parse_log_level().unwrap_or(log::Level::Info)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn profile_button(&self) -> &SubmitButtonOptions {
        &self.profile_button
    }

    pub fn signup_button(&self) -> &SubmitButtonOptions {
        &self.signup_button
    }
}
