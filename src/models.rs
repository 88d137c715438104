use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Numeric team identifier as exported by the league client
pub type TeamId = u32;

/// Season totals for one team. Read-only input to every computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSeasonAggregate {
    pub team_id: TeamId,
    /// Display name, only used in human-readable reasons
    #[serde(default)]
    pub name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    pub points_for: u32,
    pub points_against: u32,
    pub total_off_yards: u32,
    pub total_off_plays: u32,
    pub total_def_yards_allowed: u32,
    pub total_def_plays_faced: u32,
    pub takeaways: u32,
    pub giveaways: u32,
    /// Opponents faced so far, repeated for rematches
    #[serde(default)]
    pub opponent_ids: Vec<TeamId>,
}

impl TeamSeasonAggregate {
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Team {}", self.team_id)
        } else {
            self.name.clone()
        }
    }
}

/// An upcoming game on the schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledGame {
    pub schedule_id: u64,
    #[serde(default)]
    pub week: Option<u32>,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
}

/// Win/loss record for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub wins: u32,
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
}

impl Standing {
    pub fn from_aggregate(team: &TeamSeasonAggregate) -> Self {
        Standing {
            team_id: team.team_id,
            wins: team.wins,
            losses: team.losses,
            ties: team.ties,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// "W-L" or "W-L-T" when the team has tied
    pub fn record(&self) -> String {
        if self.ties > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

/// The five per-team metrics derived from season totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMetrics {
    pub win_pct: f64,
    pub net_yards_per_play: f64,
    /// Margin of victory per game, clamped to ±21
    pub capped_margin_per_game: f64,
    pub turnover_diff_per_game: f64,
    /// Average win percentage of opponents that have played
    pub opponent_win_pct_avg: f64,
}

/// 0–100 percentile position of each raw metric within the league
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileMetrics {
    pub efficiency: f64,
    pub win_quality: f64,
    pub margin: f64,
    pub turnovers: f64,
    pub schedule: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRanking {
    pub team_id: TeamId,
    /// 1-based position after sorting by power score
    pub rank: usize,
    /// Weighted composite, rounded to one decimal
    pub power_score: f64,
    pub percentiles: PercentileMetrics,
    pub raw: RawMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamePrediction {
    pub game: ScheduledGame,
    pub winner_id: TeamId,
    pub loser_id: TeamId,
    pub winner_score: i32,
    pub loser_score: i32,
    /// Always within 55–95
    pub confidence: u32,
    pub reasoning: String,
    pub home_rank: usize,
    pub away_rank: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotwSelection {
    pub game: ScheduledGame,
    pub score: f64,
    pub reasons: Vec<String>,
    pub prediction: GamePrediction,
}

/// Everything the engine needs for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub teams: Vec<TeamSeasonAggregate>,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
    /// Derived from `teams` when absent
    #[serde(default)]
    pub standings: Option<Vec<Standing>>,
}

impl SeasonSnapshot {
    pub fn standings(&self) -> Vec<Standing> {
        match &self.standings {
            Some(s) => s.clone(),
            None => self.teams.iter().map(Standing::from_aggregate).collect(),
        }
    }

    pub fn games_for_week(&self, week: Option<u32>) -> Vec<ScheduledGame> {
        match week {
            Some(w) => self
                .games
                .iter()
                .filter(|g| g.week == Some(w))
                .cloned()
                .collect(),
            None => self.games.clone(),
        }
    }
}

/// A game left out of a weekly batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedGame {
    pub schedule_id: u64,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingAggregate { team_id: TeamId },
    MissingStanding { team_id: TeamId },
    MissingRanking { team_id: TeamId },
}

/// Output envelope printed by the binary
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub generated_at: DateTime<Utc>,
    pub rankings: Vec<PowerRanking>,
    pub predictions: Vec<GamePrediction>,
    pub skipped_games: Vec<SkippedGame>,
    pub game_of_the_week: Option<GotwSelection>,
}
