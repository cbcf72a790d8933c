use clap::Parser;

/// coronabot: posts COVID-19 statistics updates to Slack
///
/// Fetches the published counts, compares them with the previous run and
/// with yesterday, and posts a message when something changed.
/// The config file is read from `$CORONABOT_CONFIG` or the user config directory.
#[derive(Parser, Debug)]
#[command(name = "coronabot")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Post an update even if nothing changed
    #[arg(short, long)]
    pub force: bool,
}

/// coronabot-rotate: start a new statistics day
///
/// Copies the latest stored snapshot to "yesterday". Run once a day at midnight.
#[derive(Parser, Debug)]
#[command(name = "coronabot-rotate")]
#[command(version, about, long_about)]
pub struct RotateCli {}
