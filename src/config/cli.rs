use crate::core::ReportStore;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalReportStore {
    base_path: String,
}

impl LocalReportStore {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl ReportStore for LocalReportStore {
    fn write_report(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(name);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}
