use clap::Parser;
use launch_dash::core::ConfigProvider;
use launch_dash::utils::{logger, validation::Validate};
use launch_dash::{server, CliConfig, Dashboard, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(if config.verbose { "debug" } else { "info" });
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting launch-dash");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::current_dir();
    let result = match Dashboard::load(&storage, &config).await {
        Ok(dashboard) => server::serve(dashboard, &config.bind_addr()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Dashboard failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
