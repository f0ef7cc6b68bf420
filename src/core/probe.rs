use crate::adapters::sink::StdoutSink;
use crate::core::{MessageSink, ProbeReport};
use crate::utils::error::Result;

/// 問候內容是合約的一部分，不可配置
pub const GREETING: &str = "Hello World";

pub struct GreetingProbe<S: MessageSink> {
    sink: S,
}

impl<S: MessageSink> GreetingProbe<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// 先寫出一行問候，成功後才回傳全新的結果映射
    pub fn invoke(&mut self) -> Result<ProbeReport> {
        tracing::debug!("Writing greeting line to sink");
        self.sink.write_line(GREETING)?;

        Ok(ProbeReport::new())
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// 宿主環境呼叫的零參數進入點，綁定真正的標準輸出
pub fn hello_world() -> Result<ProbeReport> {
    let mut probe = GreetingProbe::new(StdoutSink::new());
    probe.invoke()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::BufferSink;
    use crate::utils::error::{ErrorSeverity, ProbeError};

    struct BrokenSink;

    impl MessageSink for BrokenSink {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            Err(ProbeError::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout closed",
            )))
        }
    }

    #[test]
    fn test_invoke_writes_single_greeting_line() {
        let sink = BufferSink::new();
        let mut probe = GreetingProbe::new(sink.clone());

        let report = probe.invoke().unwrap();

        assert_eq!(report.something, 0);
        assert_eq!(sink.lines(), vec!["Hello World"]);
    }

    #[test]
    fn test_repeated_invocations_accumulate_lines() {
        let sink = BufferSink::new();
        let mut probe = GreetingProbe::new(sink.clone());

        let first = probe.invoke().unwrap();
        let second = probe.invoke().unwrap();
        let third = probe.invoke().unwrap();

        // 回傳值每次都一樣，輸出行則逐次累加
        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(sink.lines(), vec!["Hello World", "Hello World", "Hello World"]);
    }

    #[test]
    fn test_report_is_fresh_per_invocation() {
        let sink = BufferSink::new();
        let mut probe = GreetingProbe::new(sink);

        let mut earlier = probe.invoke().unwrap();
        earlier.something = 42;

        let later = probe.invoke().unwrap();
        assert_eq!(later.something, 0);
    }

    #[test]
    fn test_write_failure_propagates_without_report() {
        let mut probe = GreetingProbe::new(BrokenSink);

        let err = probe.invoke().unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_into_sink_returns_injected_sink() {
        let sink = BufferSink::new();
        let mut probe = GreetingProbe::new(sink);
        probe.invoke().unwrap();

        let sink = probe.into_sink();
        assert_eq!(sink.lines().len(), 1);
    }

    #[test]
    fn test_hello_world_entry_point() {
        let report = hello_world().unwrap();
        assert_eq!(report, ProbeReport::new());
    }
}
