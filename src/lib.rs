pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::StreamConsole;
pub use config::{toml_config::TomlConfig, DemoSettings};
pub use core::{
    division::{divide, DivisionFlow},
    engine::DemoEngine,
    size::SizeFlow,
};
pub use domain::model::{DivisionOutcome, ErrorKind, RunReport, SizeErrorPolicy, SizeOutcome};
pub use utils::error::{DemoError, Result};
