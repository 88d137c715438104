use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod config;

use config::Config;
use league_power_rankings::models::SeasonSnapshot;
use league_power_rankings::report;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let raw = std::fs::read_to_string(&config.season_file)
        .with_context(|| format!("reading {}", config.season_file.display()))?;
    let snapshot: SeasonSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", config.season_file.display()))?;
    info!(
        "Loaded {} team(s) and {} scheduled game(s) from {}",
        snapshot.teams.len(),
        snapshot.games.len(),
        config.season_file.display()
    );

    let mut report = report::build_report(&snapshot, config.week);
    if let Some(top) = config.top {
        report.rankings.truncate(top);
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
