use crate::config::DemoSettings;
use crate::domain::model::SizeErrorPolicy;
use crate::utils::error::{DemoError, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub prompts: PromptsConfig,
    #[serde(default)]
    pub size: SizeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptsConfig {
    pub division: Option<String>,
    pub size: Option<String>,
    pub closing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeConfig {
    pub on_error: Option<SizeErrorPolicy>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DemoError::Io)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DemoError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${USER_NAME}), 找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DemoError::ConfigError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 將檔案中有設定的欄位覆蓋到 settings 上
    pub fn apply_to(&self, settings: &mut DemoSettings) {
        if let Some(prompt) = &self.prompts.division {
            settings.division_prompt = prompt.clone();
        }
        if let Some(prompt) = &self.prompts.size {
            settings.size_prompt = prompt.clone();
        }
        if let Some(closing) = &self.prompts.closing {
            settings.closing_message = closing.clone();
        }
        if let Some(policy) = self.size.on_error {
            settings.size_error_policy = policy;
        }
    }

    pub fn into_settings(self) -> DemoSettings {
        let mut settings = DemoSettings::default();
        self.apply_to(&mut settings);
        settings
    }
}
