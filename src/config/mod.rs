pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "menu-etl")]
#[command(about = "Convert Hugo menu content to POS-compatible data files")]
pub struct CliConfig {
    #[arg(long, default_value = "content", help = "Hugo content directory")]
    pub content_dir: String,

    #[arg(
        long,
        default_value = "data",
        help = "Hugo data directory (mapping input and generated output)"
    )]
    pub data_dir: String,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn content_dir(&self) -> &str {
        &self.content_dir
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("content_dir", &self.content_dir)?;
        validate_path("data_dir", &self.data_dir)?;
        Ok(())
    }
}
