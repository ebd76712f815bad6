use clap::Parser;
use tracing_subscriber::EnvFilter;

use listing_health::application::config::AppConfig;
use listing_health::application::services::account::AccountHealthService;
use listing_health::application::services::alerts::AlertAggregator;
use listing_health::application::services::recommendations::RecommendationGenerator;
use listing_health::domain::ports::clock::SystemClock;
use listing_health::domain::rules::messages::MessageCatalog;
use listing_health::domain::value_objects::locale::Locale;
use listing_health::domain::value_objects::thresholds::ThresholdSet;
use listing_health::infrastructure::persistence::sqlite_store::SqliteStore;
use listing_health::presentation::cli::app::{Cli, Commands};
use listing_health::presentation::cli::commands::alerts::run_alerts;
use listing_health::presentation::cli::commands::recommend::run_recommend;
use listing_health::presentation::cli::commands::summary::run_summary;
use listing_health::presentation::cli::commands::watch::run_watch;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_locale(flag: Option<&str>, config_locale: Locale) -> anyhow::Result<Locale> {
    match flag {
        Some(value) => value.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(config_locale),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI: main.rs is the only place that knows concrete types
    let locale = resolve_locale(cli.locale.as_deref(), config.general.locale)?;
    let thresholds = ThresholdSet::from(&config.thresholds);
    let catalog = MessageCatalog::new(locale);
    let aggregator = AlertAggregator::new(thresholds.clone(), catalog);
    let generator = RecommendationGenerator::new(thresholds, catalog);
    let store = SqliteStore::new(&config.database.path)?;
    let clock = SystemClock;
    let service = AccountHealthService::new(&store, &store, &aggregator, &generator, &clock);

    tracing::debug!(%locale, db = %config.database.path, "configuration loaded");

    match cli.command {
        Commands::Recommend { location_id, json } => {
            run_recommend(&service, &location_id, json)?;
        }
        Commands::Alerts { location_id, json } => {
            run_alerts(&service, &location_id, json)?;
        }
        Commands::Summary { account_id, json } => {
            run_summary(&service, &account_id, json)?;
        }
        Commands::Watch {
            account_id,
            interval,
        } => {
            let interval_secs = interval.unwrap_or(config.general.interval_secs);
            run_watch(&service, &account_id, interval_secs).await?;
        }
    }

    Ok(())
}
