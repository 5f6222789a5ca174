use anyhow::Context;
use clap::Parser;
use guarded_divide::core::Console;
use guarded_divide::utils::logger;
use guarded_divide::{CliConfig, DemoEngine, StreamConsole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting guarded-divide");
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    let mut engine = DemoEngine::new(StreamConsole::stdio(), settings);

    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Demo run completed");
            if config.report_json {
                let line =
                    serde_json::to_string(&report).context("failed to serialize run report")?;
                engine.console_mut().write_line(&line).await?;
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Demo run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            // 未被捕捉的錯誤: 輸出到 stderr 並以非零代碼結束
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
