use std::path::PathBuf;

use clap::Parser;

/// Weekly power rankings and game predictions for a simulated football league
#[derive(Parser, Debug, Clone)]
#[command(name = "league-power-rankings", version, about)]
pub struct Config {
    /// Season snapshot (team aggregates, schedule, optional standings) as JSON
    #[arg(long, env = "SEASON_FILE")]
    pub season_file: PathBuf,

    /// Only predict games scheduled in this week
    #[arg(long, env = "WEEK")]
    pub week: Option<u32>,

    /// Only print the top N power rankings
    #[arg(long, env = "TOP")]
    pub top: Option<usize>,

    /// Pretty-print the JSON report
    #[arg(long, env = "PRETTY", default_value = "false")]
    pub pretty: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.top == Some(0) {
            anyhow::bail!("top must be at least 1");
        }
        if !self.season_file.is_file() {
            anyhow::bail!(
                "season file {} does not exist",
                self.season_file.display()
            );
        }
        Ok(())
    }
}
