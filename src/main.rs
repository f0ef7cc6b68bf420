use clap::Parser;
use hello_probe::utils::{logger, validation::Validate};
use hello_probe::{CliConfig, LocalReportStore, ProbeRunner, StdoutSink};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hello-probe CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建接收器、存儲與執行器
    let sink = StdoutSink::new();
    let store = LocalReportStore::new(config.output_path.clone());
    let mut runner = ProbeRunner::new(sink, store, config);

    match runner.run() {
        Ok(output_path) => {
            tracing::info!("✅ Probe run completed successfully!");
            tracing::info!("📁 Summary saved to: {}", output_path);
            println!("✅ Probe run completed successfully!");
            println!("📁 Summary saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Probe run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                hello_probe::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                hello_probe::utils::error::ErrorSeverity::Medium => 2, // 配置錯誤
                hello_probe::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                hello_probe::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
