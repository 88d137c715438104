//! Heuristic game outcome model.
//!
//! Expected points for a side are built from its scoring average, how weak the
//! opposing defense is relative to the league, its own power score and, for the
//! home side, a fixed home-field bonus:
//!
//!   expected = ppg + (N − opp_def_rank) / N × 4 + power / 100 × 3 [+ 2.5]
//!
//! The winner is the side with the higher rounded expectation; the home team
//! takes a dead-even projection. Confidence grows with both the power gap and
//! the projected margin and is clamped to 55–95.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::AnalyticsError;
use crate::models::{
    GamePrediction, PowerRanking, ScheduledGame, SkipReason, SkippedGame, Standing, TeamId,
    TeamSeasonAggregate,
};
use crate::policy::PREDICTOR;

/// Defensive rank per team: fewest points allowed is rank 1.
///
/// Equal totals keep input order.
pub fn defensive_ranks(teams: &[TeamSeasonAggregate]) -> HashMap<TeamId, usize> {
    let mut sorted: Vec<&TeamSeasonAggregate> = teams.iter().collect();
    sorted.sort_by_key(|t| t.points_against);
    sorted
        .iter()
        .enumerate()
        .map(|(i, t)| (t.team_id, i + 1))
        .collect()
}

fn points_per_game(team: &TeamSeasonAggregate) -> f64 {
    if team.games_played == 0 {
        PREDICTOR.league_avg_points
    } else {
        team.points_for as f64 / team.games_played as f64
    }
}

/// Rounded expected points for `team` against a defense ranked `opp_def_rank`.
pub fn expected_score(
    team: &TeamSeasonAggregate,
    power_score: f64,
    opp_def_rank: usize,
    total_teams: usize,
    is_home: bool,
) -> i32 {
    let defense_adjustment = if total_teams == 0 {
        0.0
    } else {
        let n = total_teams as f64;
        (n - opp_def_rank as f64) / n * PREDICTOR.defense_factor
    };
    let power_influence = power_score / 100.0 * PREDICTOR.power_factor;
    let home_field = if is_home { PREDICTOR.home_field } else { 0.0 };

    (points_per_game(team) + defense_adjustment + power_influence + home_field).round() as i32
}

/// Confidence in the predicted winner, as a whole number in 55–95.
pub fn confidence(power_diff: f64, score_diff: f64) -> u32 {
    let raw = PREDICTOR.confidence_base
        + PREDICTOR.confidence_per_power_point * power_diff.abs()
        + PREDICTOR.confidence_per_score_point * score_diff.abs();
    raw.clamp(PREDICTOR.confidence_min, PREDICTOR.confidence_max)
        .round() as u32
}

pub fn power_gap_label(power_diff: f64) -> &'static str {
    let gap = power_diff.abs();
    if gap > PREDICTOR.significant_gap {
        "Significant power advantage"
    } else if gap > PREDICTOR.moderate_gap {
        "Moderate power edge"
    } else {
        "Close matchup"
    }
}

fn with_record(rank: usize, standing: Option<&Standing>) -> String {
    match standing {
        Some(s) => format!("#{} ({})", rank, s.record()),
        None => format!("#{}", rank),
    }
}

/// Power ranking for `team_id`, or the id itself when it was never ranked.
fn find_ranking(rankings: &[PowerRanking], team_id: TeamId) -> Result<&PowerRanking, TeamId> {
    rankings
        .iter()
        .find(|r| r.team_id == team_id)
        .ok_or(team_id)
}

/// Predict a single game.
///
/// `teams` is the whole league and is used for defensive ranks and the team
/// count. Standings only feed the rationale text.
///
/// Fails with [`AnalyticsError::MissingData`] if either side was never ranked.
pub fn predict_game(
    game: &ScheduledGame,
    home: &TeamSeasonAggregate,
    away: &TeamSeasonAggregate,
    rankings: &[PowerRanking],
    teams: &[TeamSeasonAggregate],
    home_standing: Option<&Standing>,
    away_standing: Option<&Standing>,
) -> Result<GamePrediction, AnalyticsError> {
    predict_with_defense(
        game,
        home,
        away,
        rankings,
        &defensive_ranks(teams),
        teams.len(),
        (home_standing, away_standing),
    )
    .map_err(|team_id| AnalyticsError::MissingData { team_id })
}

fn predict_with_defense(
    game: &ScheduledGame,
    home: &TeamSeasonAggregate,
    away: &TeamSeasonAggregate,
    rankings: &[PowerRanking],
    def_ranks: &HashMap<TeamId, usize>,
    total_teams: usize,
    (home_standing, away_standing): (Option<&Standing>, Option<&Standing>),
) -> Result<GamePrediction, TeamId> {
    let home_power = find_ranking(rankings, home.team_id)?;
    let away_power = find_ranking(rankings, away.team_id)?;

    // A team missing from the defensive table is treated as the worst defense
    let def_rank = |id: TeamId| def_ranks.get(&id).copied().unwrap_or(total_teams);

    let home_expected = expected_score(
        home,
        home_power.power_score,
        def_rank(away.team_id),
        total_teams,
        true,
    );
    let away_expected = expected_score(
        away,
        away_power.power_score,
        def_rank(home.team_id),
        total_teams,
        false,
    );

    // Dead-even projections go to the home side
    let home_wins = home_expected >= away_expected;
    let power_diff = home_power.power_score - away_power.power_score;
    let confidence = confidence(power_diff, (home_expected - away_expected) as f64);

    let (winner, loser, winner_score, loser_score) = if home_wins {
        (home_power, away_power, home_expected, away_expected)
    } else {
        (away_power, home_power, away_expected, home_expected)
    };
    let (winner_standing, loser_standing) = if home_wins {
        (home_standing, away_standing)
    } else {
        (away_standing, home_standing)
    };

    let decider = if home_wins {
        "Home field edge"
    } else if away_power.rank > home_power.rank {
        "Road upset"
    } else {
        "Wins on the road"
    };
    let reasoning = format!(
        "{} vs {}: {}. {}.",
        with_record(winner.rank, winner_standing),
        with_record(loser.rank, loser_standing),
        power_gap_label(power_diff),
        decider
    );

    debug!(
        "Game {}: {} {} - {} {} (conf {}%)",
        game.schedule_id,
        home.display_name(),
        home_expected,
        away.display_name(),
        away_expected,
        confidence
    );

    Ok(GamePrediction {
        game: game.clone(),
        winner_id: winner.team_id,
        loser_id: loser.team_id,
        winner_score,
        loser_score,
        confidence,
        reasoning,
        home_rank: home_power.rank,
        away_rank: away_power.rank,
    })
}

/// Result of predicting a week's schedule.
#[derive(Debug, Clone, Default)]
pub struct WeeklyPredictions {
    pub predictions: Vec<GamePrediction>,
    pub skipped: Vec<SkippedGame>,
}

fn check_game(
    game: &ScheduledGame,
    teams_by_id: &HashMap<TeamId, &TeamSeasonAggregate>,
    standings_by_id: &HashMap<TeamId, &Standing>,
) -> Result<(), SkipReason> {
    for team_id in [game.home_team_id, game.away_team_id] {
        if !teams_by_id.contains_key(&team_id) {
            return Err(SkipReason::MissingAggregate { team_id });
        }
        if !standings_by_id.contains_key(&team_id) {
            return Err(SkipReason::MissingStanding { team_id });
        }
    }
    Ok(())
}

/// Predict every game in `games`.
///
/// A game whose teams lack an aggregate, a standing or a power ranking is
/// skipped and reported; the rest of the week is still predicted.
pub fn predict_week(
    games: &[ScheduledGame],
    teams: &[TeamSeasonAggregate],
    rankings: &[PowerRanking],
    standings: &[Standing],
) -> WeeklyPredictions {
    let teams_by_id: HashMap<TeamId, &TeamSeasonAggregate> =
        teams.iter().map(|t| (t.team_id, t)).collect();
    let standings_by_id: HashMap<TeamId, &Standing> =
        standings.iter().map(|s| (s.team_id, s)).collect();
    let def_ranks = defensive_ranks(teams);

    let mut out = WeeklyPredictions::default();
    for game in games {
        let result = check_game(game, &teams_by_id, &standings_by_id).and_then(|()| {
            let home = teams_by_id[&game.home_team_id];
            let away = teams_by_id[&game.away_team_id];
            predict_with_defense(
                game,
                home,
                away,
                rankings,
                &def_ranks,
                teams.len(),
                (
                    standings_by_id.get(&home.team_id).copied(),
                    standings_by_id.get(&away.team_id).copied(),
                ),
            )
            .map_err(|team_id| SkipReason::MissingRanking { team_id })
        });

        match result {
            Ok(prediction) => out.predictions.push(prediction),
            Err(reason) => {
                warn!(
                    "Skipping game {} ({} @ {}): {:?}",
                    game.schedule_id, game.away_team_id, game.home_team_id, reason
                );
                out.skipped.push(SkippedGame {
                    schedule_id: game.schedule_id,
                    reason,
                });
            }
        }
    }

    info!(
        "Predicted {} of {} game(s) ({} skipped)",
        out.predictions.len(),
        games.len(),
        out.skipped.len()
    );
    out
}
