use crate::config::toml_config::TomlConfig;
use crate::config::DemoSettings;
use crate::domain::model::SizeErrorPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "guarded-divide")]
#[command(about = "Reads two integers and an array size from stdin, reporting each kind of bad input")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do when the array size is rejected (overrides the config file)
    #[arg(long, value_enum)]
    pub size_errors: Option<SizeErrorPolicy>,

    /// Print the run report as a JSON line after the closing message
    #[arg(long)]
    pub report_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 合併設定: 命令列 > TOML 檔案 > 預設值
    pub fn resolve(&self) -> Result<DemoSettings> {
        let mut settings = DemoSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(policy) = self.size_errors {
            tracing::debug!("Size error policy overridden to {:?}", policy);
            settings.size_error_policy = policy;
        }

        settings.validate()?;
        Ok(settings)
    }
}
