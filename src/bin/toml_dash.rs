use clap::Parser;
use launch_dash::config::toml_config::TomlConfig;
use launch_dash::core::charts::count_outcomes;
use launch_dash::core::filter::filter_by_site;
use launch_dash::core::ConfigProvider;
use launch_dash::utils::{logger, validation::Validate};
use launch_dash::{server, Dashboard, LocalStorage, SiteSelection};

#[derive(Parser)]
#[command(name = "toml-dash")]
#[command(about = "Launch dashboard with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "dash-config.toml")]
    config: String,

    /// Override the port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Load the dataset and print per-site outcome counts without serving
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    logger::init_logger(config.log_format(), config.log_level());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Some(port) = args.port {
        config.server.port = Some(port);
        tracing::info!("🔧 Port overridden to: {}", port);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let storage = LocalStorage::current_dir();
    let dashboard = match Dashboard::load(&storage, &config).await {
        Ok(dashboard) => dashboard,
        Err(e) => {
            tracing::error!("❌ Failed to load dataset: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if args.dry_run {
        print_summary(&dashboard);
        return Ok(());
    }

    server::serve(dashboard, &config.bind_addr()).await?;
    Ok(())
}

fn print_summary(dashboard: &Dashboard) {
    let table = dashboard.table();
    let mut selections = vec![SiteSelection::All];
    selections.extend(
        table
            .launch_sites()
            .into_iter()
            .map(|s| SiteSelection::Site(s.to_string())),
    );

    println!("{:<20} {:>8} {:>8} {:>8}", "Site", "Total", "Success", "Failure");
    for site in selections {
        let counts = count_outcomes(&filter_by_site(table, &site));
        println!(
            "{:<20} {:>8} {:>8} {:>8}",
            site.to_string(),
            counts.total(),
            counts.success,
            counts.failure
        );
    }
}
