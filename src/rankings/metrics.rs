//! Raw per-team metrics derived from season totals.
//!
//! Every ratio falls back to a neutral value when its denominator is zero, so a
//! team that has not played yet produces `{0, 0, 0, 0, 0.5}` instead of NaN.

use std::collections::HashMap;

use crate::models::{RawMetrics, TeamId, TeamSeasonAggregate};
use crate::policy::POWER;

/// Opponent average used when no opponent has played a game (.500 schedule).
const NEUTRAL_SCHEDULE: f64 = 0.5;

fn per(numerator: f64, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

pub fn win_pct(team: &TeamSeasonAggregate) -> f64 {
    per(team.wins as f64, team.games_played)
}

/// Offensive yards per play minus defensive yards allowed per play.
pub fn net_yards_per_play(team: &TeamSeasonAggregate) -> f64 {
    per(team.total_off_yards as f64, team.total_off_plays)
        - per(team.total_def_yards_allowed as f64, team.total_def_plays_faced)
}

/// Point differential per game, clamped so one blowout cannot dominate.
pub fn capped_margin_per_game(team: &TeamSeasonAggregate) -> f64 {
    let diff = team.points_for as f64 - team.points_against as f64;
    per(diff, team.games_played).clamp(-POWER.margin_cap, POWER.margin_cap)
}

pub fn turnover_diff_per_game(team: &TeamSeasonAggregate) -> f64 {
    per(
        team.takeaways as f64 - team.giveaways as f64,
        team.games_played,
    )
}

/// Average win percentage of the opponents a team has faced.
///
/// Opponents missing from `population` or without a game played are ignored.
pub fn opponent_win_pct_avg(
    team: &TeamSeasonAggregate,
    population: &HashMap<TeamId, &TeamSeasonAggregate>,
) -> f64 {
    let opponents: Vec<f64> = team
        .opponent_ids
        .iter()
        .filter_map(|id| population.get(id))
        .filter(|opp| opp.games_played > 0)
        .map(|opp| win_pct(opp))
        .collect();

    if opponents.is_empty() {
        NEUTRAL_SCHEDULE
    } else {
        opponents.iter().sum::<f64>() / opponents.len() as f64
    }
}

pub fn raw_metrics(
    team: &TeamSeasonAggregate,
    population: &HashMap<TeamId, &TeamSeasonAggregate>,
) -> RawMetrics {
    RawMetrics {
        win_pct: win_pct(team),
        net_yards_per_play: net_yards_per_play(team),
        capped_margin_per_game: capped_margin_per_game(team),
        turnover_diff_per_game: turnover_diff_per_game(team),
        opponent_win_pct_avg: opponent_win_pct_avg(team, population),
    }
}

/// Raw metrics for every team, in input order.
pub fn compute_raw_metrics(teams: &[TeamSeasonAggregate]) -> Vec<RawMetrics> {
    let population: HashMap<TeamId, &TeamSeasonAggregate> =
        teams.iter().map(|t| (t.team_id, t)).collect();
    teams.iter().map(|t| raw_metrics(t, &population)).collect()
}
