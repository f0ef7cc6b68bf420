pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalReportStore, CliConfig};

pub use adapters::sink::{BufferSink, StdoutSink};
pub use config::toml_config::TomlConfig;
pub use core::probe::{hello_world, GreetingProbe, GREETING};
pub use core::runner::ProbeRunner;
pub use core::{ProbeReport, RunSummary};
pub use utils::error::{ProbeError, Result};
