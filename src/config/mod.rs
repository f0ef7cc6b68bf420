#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "hello-probe")]
#[command(about = "A greeting probe that exchanges a trivial structured value with its host")]
pub struct CliConfig {
    #[arg(long, default_value = "1")]
    pub invocations: usize,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, help = "Write the run summary as compact JSON")]
    pub compact: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn invocations(&self) -> usize {
        self.invocations
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn pretty_report(&self) -> bool {
        !self.compact
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_path", &self.output_path)
    }
}
