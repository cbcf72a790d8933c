use std::time::Duration;

use clap::Parser;

use coronabot::application::config::AppConfig;
use coronabot::application::services::update::UpdateService;
use coronabot::domain::diff::DiffEngine;
use coronabot::domain::ports::notifier::Notifier;
use coronabot::infrastructure::notifications::create_notifier;
use coronabot::infrastructure::open_store;
use coronabot::infrastructure::sources::create_extractor;
use coronabot::infrastructure::sources::http_fetcher::HttpFetcher;
use coronabot::presentation::cli::app::Cli;
use coronabot::presentation::cli::bootstrap::{report_failure, setup_tracing};

async fn run(config: &AppConfig, notifier: &dyn Notifier, force: bool) -> anyhow::Result<()> {
    config.validate()?;

    // Manual DI, main.rs is the only place that knows concrete types
    let fetcher = HttpFetcher::new(Duration::from_secs(config.source.timeout_secs))?;
    let extractor = create_extractor(&config.source)?;
    let store = open_store(&config.store)?;
    let engine = DiffEngine::new(&config.tracking.regional_metrics);

    let service = UpdateService::new(
        &fetcher,
        &*extractor,
        &*store,
        notifier,
        &engine,
        &config.source.url,
    );
    let result = service.run_once(force).await?;
    tracing::debug!("Cycle finished: {result:?}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing();

    let config = AppConfig::load()?;
    let notifier = create_notifier(&config.slack)?;

    if let Err(e) = run(&config, &*notifier, cli.force).await {
        report_failure(&*notifier, &e).await;
        return Err(e);
    }
    Ok(())
}
