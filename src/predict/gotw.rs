//! Game of the Week selection.
//!
//! Each candidate is scored on combined power, combined record, how close the
//! two teams are in the rankings and two flat bonuses (top-10 meeting, an
//! unbeaten team involved). The highest total wins; on an exact tie the earlier
//! candidate is kept.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::AnalyticsError;
use crate::models::{
    GamePrediction, GotwSelection, PowerRanking, ScheduledGame, Standing, TeamId,
};
use crate::policy::GOTW;

/// Composite score of one candidate game and the reasons behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct GotwScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Score a matchup from both teams' power rankings and standings.
pub fn score_matchup(
    home: &PowerRanking,
    away: &PowerRanking,
    home_standing: &Standing,
    away_standing: &Standing,
) -> GotwScore {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let combined_power = home.power_score + away.power_score;
    score += combined_power / GOTW.power_divisor * GOTW.power_points;
    if combined_power > GOTW.power_trigger {
        reasons.push(format!("Heavyweight clash: combined power {:.1}", combined_power));
    }

    let wins = home_standing.wins + away_standing.wins;
    let games = home_standing.games() + away_standing.games();
    let combined_win_pct = if games == 0 {
        0.0
    } else {
        wins as f64 / games as f64
    };
    score += combined_win_pct * GOTW.record_points;
    if combined_win_pct > GOTW.record_trigger {
        reasons.push(format!(
            "Winning teams: {:.0}% combined win rate",
            combined_win_pct * 100.0
        ));
    }

    let rank_diff = home.rank.abs_diff(away.rank);
    score += (GOTW.balance_points - rank_diff as f64).max(0.0);
    if rank_diff <= GOTW.balance_trigger {
        reasons.push(format!("Evenly matched: #{} vs #{}", home.rank, away.rank));
    }

    if home.rank <= GOTW.top_rank && away.rank <= GOTW.top_rank {
        score += GOTW.top_bonus;
        reasons.push("Top-10 showdown".to_string());
    }

    let home_unbeaten = home_standing.losses == 0;
    let away_unbeaten = away_standing.losses == 0;
    if home_unbeaten || away_unbeaten {
        score += GOTW.undefeated_bonus;
        if home_unbeaten && away_unbeaten {
            reasons.push("Both teams undefeated".to_string());
        } else {
            let (unbeaten, standing) = if home_unbeaten {
                (home, home_standing)
            } else {
                (away, away_standing)
            };
            reasons.push(format!(
                "#{} puts an unbeaten {} record on the line",
                unbeaten.rank,
                standing.record()
            ));
        }
    }

    GotwScore { score, reasons }
}

/// Pick the single most compelling game among `games`.
///
/// Games without a prediction, or whose teams lack a power ranking or a
/// standing, are left out. Fails with [`AnalyticsError::NoEligibleGames`] when
/// nothing is left.
pub fn select_game_of_the_week(
    games: &[ScheduledGame],
    predictions: &[GamePrediction],
    rankings: &[PowerRanking],
    standings: &[Standing],
) -> Result<GotwSelection, AnalyticsError> {
    let predictions_by_id: HashMap<u64, &GamePrediction> = predictions
        .iter()
        .map(|p| (p.game.schedule_id, p))
        .collect();
    let rankings_by_id: HashMap<TeamId, &PowerRanking> =
        rankings.iter().map(|r| (r.team_id, r)).collect();
    let standings_by_id: HashMap<TeamId, &Standing> =
        standings.iter().map(|s| (s.team_id, s)).collect();

    let mut best: Option<(GotwScore, &ScheduledGame, &GamePrediction)> = None;
    for game in games {
        let (Some(prediction), Some(home), Some(away), Some(home_standing), Some(away_standing)) = (
            predictions_by_id.get(&game.schedule_id),
            rankings_by_id.get(&game.home_team_id),
            rankings_by_id.get(&game.away_team_id),
            standings_by_id.get(&game.home_team_id),
            standings_by_id.get(&game.away_team_id),
        ) else {
            debug!("GOTW: game {} lacks data, skipping", game.schedule_id);
            continue;
        };

        let scored = score_matchup(home, away, home_standing, away_standing);
        debug!("GOTW: game {} scored {:.1}", game.schedule_id, scored.score);
        let better = match &best {
            Some((current, _, _)) => scored.score > current.score,
            None => true,
        };
        if better {
            best = Some((scored, game, *prediction));
        }
    }

    let (scored, game, prediction) = best.ok_or(AnalyticsError::NoEligibleGames {
        candidates: games.len(),
    })?;
    info!(
        "Game of the Week: {} @ {} (score {:.1})",
        game.away_team_id, game.home_team_id, scored.score
    );
    Ok(GotwSelection {
        game: game.clone(),
        score: scored.score,
        reasons: scored.reasons,
        prediction: prediction.clone(),
    })
}
