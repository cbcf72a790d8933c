use clap::Parser;

use coronabot::application::config::AppConfig;
use coronabot::application::services::rotation::rotate_day;
use coronabot::infrastructure::notifications::create_notifier;
use coronabot::infrastructure::open_store;
use coronabot::presentation::cli::app::RotateCli;
use coronabot::presentation::cli::bootstrap::{report_failure, setup_tracing};

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let store = open_store(&config.store)?;
    let result = rotate_day(&*store)?;
    tracing::debug!("Rotation finished: {result:?}");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    RotateCli::parse();

    setup_tracing();

    let config = AppConfig::load()?;
    let notifier = create_notifier(&config.slack)?;

    if let Err(e) = run(&config) {
        report_failure(&*notifier, &e).await;
        return Err(e);
    }
    Ok(())
}
