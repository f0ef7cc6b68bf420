pub mod probe;
pub mod runner;

pub use crate::domain::model::{ProbeReport, RunSummary};
pub use crate::domain::ports::{ConfigProvider, MessageSink, ReportStore};
pub use crate::utils::error::Result;
