use crate::adapters::http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::config::toml_config::{TomlConfig, MAX_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::domain::model::ConverterMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "roman-converter")]
#[command(about = "Convert between Roman numerals and integers")]
pub struct CliConfig {
    /// Convert through the remote service or locally
    #[arg(long, value_enum)]
    pub mode: Option<ConverterMode>,

    /// Base URL of the conversion service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout for the conversion service
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Convert this Roman numeral and exit
    #[arg(long, conflicts_with = "integer")]
    pub roman: Option<String>,

    /// Convert this integer and exit
    #[arg(long)]
    pub integer: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Fills settings not given on the command line from a config file.
    pub fn merge_file(&mut self, file: &TomlConfig) {
        if self.mode.is_none() {
            self.mode = file.service.mode;
        }
        if self.base_url.is_none() {
            self.base_url.clone_from(&file.service.base_url);
        }
        if self.timeout_seconds.is_none() {
            self.timeout_seconds = file.service.timeout_seconds;
        }
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds())
    }

    fn mode(&self) -> ConverterMode {
        self.mode.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.mode() == ConverterMode::Networked {
            validate_url("base_url", self.base_url())?;
        }
        validate_range("timeout_seconds", self.timeout_seconds(), 1, MAX_TIMEOUT_SECONDS)
    }
}
