use crate::adapters::host;
use crate::core::probe::GreetingProbe;
use crate::core::{ConfigProvider, MessageSink, ReportStore, RunSummary};
use crate::utils::error::Result;
use chrono::Utc;
use std::time::Instant;

pub const REPORT_FILENAME: &str = "probe_report.json";

pub struct ProbeRunner<S: MessageSink, R: ReportStore, C: ConfigProvider> {
    probe: GreetingProbe<S>,
    store: R,
    config: C,
}

impl<S: MessageSink, R: ReportStore, C: ConfigProvider> ProbeRunner<S, R, C> {
    pub fn new(sink: S, store: R, config: C) -> Self {
        Self {
            probe: GreetingProbe::new(sink),
            store,
            config,
        }
    }

    pub fn run(&mut self) -> Result<String> {
        let started_at = Utc::now();
        let timer = Instant::now();
        let planned = self.config.invocations();

        println!("Starting greeting probe...");

        // Invoke
        println!("Invoking probe {} times...", planned);
        let mut reports = Vec::with_capacity(planned);
        for call in 0..planned {
            let report = self.probe.invoke()?;

            // 每次呼叫都走一遍宿主值轉換，這正是腳手架要驗證的交換路徑
            let host_value = host::to_host_value(&report)?;
            tracing::debug!("Invocation {}/{} exchanged {}", call + 1, planned, host_value);

            reports.push(report);
        }
        println!("Collected {} reports", reports.len());

        // Summarize
        println!("Writing run summary...");
        let summary = RunSummary {
            started_at,
            elapsed_ms: timer.elapsed().as_millis() as u64,
            invocations: reports.len(),
            reports,
        };

        let data = if self.config.pretty_report() {
            serde_json::to_vec_pretty(&summary)?
        } else {
            serde_json::to_vec(&summary)?
        };
        self.store.write_report(REPORT_FILENAME, &data)?;

        let output_path = format!("{}/{}", self.config.output_path(), REPORT_FILENAME);
        println!("Summary saved to: {}", output_path);

        Ok(output_path)
    }
}
