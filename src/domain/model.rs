use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 探測回傳的結果映射，固定只有一個欄位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub something: i64,
}

impl ProbeReport {
    pub fn new() -> Self {
        Self { something: 0 }
    }
}

impl Default for ProbeReport {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub invocations: usize,
    pub reports: Vec<ProbeReport>,
}
