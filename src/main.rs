use clap::Parser;
use publish_probe::utils::{logger, validation::Validate};
use publish_probe::{CliConfig, CommandHint, HttpHealthProbe, Result, SmokeTest};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting publish-probe");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("❌ Publish probe failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        // 連線錯誤已經寫進 stdout 報告
        if !e.is_connectivity() {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
        }

        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Publish probe completed");
}

async fn run(config: &CliConfig) -> Result<()> {
    config.validate()?;

    let article = config.load_article()?;
    let probe = HttpHealthProbe::new(&config.base_url, config.timeout())?;
    let hint = CommandHint::new(&config.base_url, &config.api_key_var);
    let smoke = SmokeTest::new(probe, article, hint);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    smoke.run(&mut out).await
}
