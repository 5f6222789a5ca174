#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::SizeErrorPolicy;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DIVISION_PROMPT: &str = "Enter two numbers to be divided:";
pub const DEFAULT_SIZE_PROMPT: &str = "Enter the size of the array:";
pub const DEFAULT_CLOSING_MESSAGE: &str =
    "Exception handling methods like try.. catch, throw and finally are demonstrated.";

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSettings {
    pub division_prompt: String,
    pub size_prompt: String,
    pub closing_message: String,
    pub size_error_policy: SizeErrorPolicy,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            division_prompt: DEFAULT_DIVISION_PROMPT.to_string(),
            size_prompt: DEFAULT_SIZE_PROMPT.to_string(),
            closing_message: DEFAULT_CLOSING_MESSAGE.to_string(),
            size_error_policy: SizeErrorPolicy::default(),
        }
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("prompts.division", &self.division_prompt)?;
        validate_non_empty_string("prompts.size", &self.size_prompt)?;
        validate_non_empty_string("prompts.closing", &self.closing_message)?;
        Ok(())
    }
}

impl ConfigProvider for DemoSettings {
    fn division_prompt(&self) -> &str {
        &self.division_prompt
    }

    fn size_prompt(&self) -> &str {
        &self.size_prompt
    }

    fn closing_message(&self) -> &str {
        &self.closing_message
    }

    fn size_error_policy(&self) -> SizeErrorPolicy {
        self.size_error_policy
    }
}
