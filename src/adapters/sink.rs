use crate::domain::ports::MessageSink;
use crate::utils::error::Result;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// 寫到行程的標準輸出；宿主環境載入時看到的就是這個輸出流
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for StdoutSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}

/// 擷取輸出行的記憶體接收器，測試與嵌入端用
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.clone()
    }
}

impl MessageSink for BufferSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.push(line.to_string());
        Ok(())
    }
}
