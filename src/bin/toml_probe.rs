use clap::Parser;
use hello_probe::config::toml_config::TomlConfig;
use hello_probe::utils::{logger, validation::Validate};
use hello_probe::{LocalReportStore, ProbeRunner, StdoutSink};

#[derive(Parser)]
#[command(name = "toml-probe")]
#[command(about = "Greeting probe driver with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "probe-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override invocation count from config
    #[arg(long)]
    invocations: Option<usize>,

    /// Dry run - show what would be invoked without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based greeting probe");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(invocations) = args.invocations {
        config.run = Some(hello_probe::config::toml_config::RunSection {
            invocations: Some(invocations),
        });
        tracing::info!("🔧 Invocation count overridden to: {}", invocations);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual invocation will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    // 創建接收器、存儲與執行器
    let sink = StdoutSink::new();
    let store = LocalReportStore::new(config.output_path().to_string());
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Probe: {} v{}",
        config.probe.name, config.probe.version
    );
    println!("  Invocations: {}", config.invocations());
    println!("  Output: {}", config.output_path());
    println!(
        "  Report format: {}",
        if config.pretty_report() {
            "pretty JSON"
        } else {
            "compact JSON"
        }
    );

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 呼叫行為分析
    println!("📣 Greeting Output:");
    println!("  Lines written to stdout: {}", config.invocations());
    println!("  Each line: {}", hello_probe::GREETING);

    // 宿主交換分析
    println!();
    println!("🔄 Host Value Exchange:");
    println!("  Reports returned: {}", config.invocations());
    println!("  Each report: {{\"something\":0}}");

    // 輸出分析
    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}/probe_report.json", config.output_path());
    println!(
        "  Format: {}",
        if config.pretty_report() {
            "pretty JSON"
        } else {
            "compact JSON"
        }
    );

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");
}
