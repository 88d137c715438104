use tracing::{debug, info};

use crate::models::{PercentileMetrics, PowerRanking, RawMetrics, TeamSeasonAggregate};
use crate::policy::POWER;

use super::metrics::compute_raw_metrics;
use super::percentile::percentiles;

fn round_to_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Weighted composite of the five percentiles, rounded to one decimal.
pub fn power_score(p: &PercentileMetrics) -> f64 {
    round_to_tenth(
        POWER.efficiency * p.efficiency
            + POWER.win_quality * p.win_quality
            + POWER.margin * p.margin
            + POWER.turnovers * p.turnovers
            + POWER.schedule * p.schedule,
    )
}

/// Percentile breakdown for each team, in input order.
pub fn compute_percentiles(raw: &[RawMetrics]) -> Vec<PercentileMetrics> {
    let column = |f: fn(&RawMetrics) -> f64| percentiles(&raw.iter().map(f).collect::<Vec<_>>());

    let efficiency = column(|m| m.net_yards_per_play);
    let win_quality = column(|m| m.win_pct);
    let margin = column(|m| m.capped_margin_per_game);
    let turnovers = column(|m| m.turnover_diff_per_game);
    let schedule = column(|m| m.opponent_win_pct_avg);

    (0..raw.len())
        .map(|i| PercentileMetrics {
            efficiency: efficiency[i],
            win_quality: win_quality[i],
            margin: margin[i],
            turnovers: turnovers[i],
            schedule: schedule[i],
        })
        .collect()
}

/// Rank the whole league by power score.
///
/// Teams are sorted by descending score with a stable sort, so teams with the
/// same rounded score keep their input order. Ranks run 1..=n with no gaps.
pub fn compute_power_rankings(teams: &[TeamSeasonAggregate]) -> Vec<PowerRanking> {
    let raw = compute_raw_metrics(teams);
    let pct = compute_percentiles(&raw);

    let mut rankings: Vec<PowerRanking> = teams
        .iter()
        .zip(raw)
        .zip(pct)
        .map(|((team, raw), percentiles)| PowerRanking {
            team_id: team.team_id,
            rank: 0,
            power_score: power_score(&percentiles),
            percentiles,
            raw,
        })
        .collect();

    rankings.sort_by(|a, b| b.power_score.total_cmp(&a.power_score));
    for (i, r) in rankings.iter_mut().enumerate() {
        r.rank = i + 1;
        debug!(
            "#{} team {} power={:.1} (eff={:.1} wq={:.1} mov={:.1} tod={:.1} sos={:.1})",
            r.rank,
            r.team_id,
            r.power_score,
            r.percentiles.efficiency,
            r.percentiles.win_quality,
            r.percentiles.margin,
            r.percentiles.turnovers,
            r.percentiles.schedule
        );
    }

    if let Some(top) = rankings.first() {
        info!(
            "Ranked {} team(s); #1 is team {} ({:.1})",
            rankings.len(),
            top.team_id,
            top.power_score
        );
    }
    rankings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;
    use approx::assert_relative_eq;

    fn make_team(id: TeamId, wins: u32, losses: u32) -> TeamSeasonAggregate {
        TeamSeasonAggregate {
            team_id: id,
            name: String::new(),
            games_played: wins + losses,
            wins,
            losses,
            ties: 0,
            points_for: 20 * (wins + losses),
            points_against: 20 * (wins + losses),
            total_off_yards: 5000,
            total_off_plays: 1000,
            total_def_yards_allowed: 5000,
            total_def_plays_faced: 1000,
            takeaways: 10,
            giveaways: 10,
            opponent_ids: vec![],
        }
    }

    fn league() -> Vec<TeamSeasonAggregate> {
        (1..=8)
            .map(|id| {
                let mut t = make_team(id, id % 5, 4 - id % 5);
                t.points_for = 60 + 17 * id;
                t.points_against = 200 - 13 * id;
                t.total_off_yards = 4000 + 150 * ((id * 7) % 8);
                t.total_def_yards_allowed = 4200 + 90 * ((id * 3) % 8);
                t.takeaways = (id * 5) % 9;
                t.giveaways = (id * 2) % 7;
                t.opponent_ids = (1..=8).filter(|o| *o != id).take(4).collect();
                t
            })
            .collect()
    }

    #[test]
    fn weighted_score_uses_fixed_weights() {
        let p = PercentileMetrics {
            efficiency: 100.0,
            win_quality: 0.0,
            margin: 50.0,
            turnovers: 0.0,
            schedule: 100.0,
        };
        // 30 + 0 + 7.5 + 0 + 15
        assert_relative_eq!(power_score(&p), 52.5, epsilon = 1e-9);
    }

    #[test]
    fn score_rounds_to_one_decimal() {
        let p = PercentileMetrics {
            efficiency: 100.0 / 3.0,
            win_quality: 100.0 / 3.0,
            margin: 0.0,
            turnovers: 0.0,
            schedule: 0.0,
        };
        // 0.55 × 33.33… = 18.333…
        assert_relative_eq!(power_score(&p), 18.3, epsilon = 1e-9);
    }

    #[test]
    fn empty_league_has_no_rankings() {
        assert!(compute_power_rankings(&[]).is_empty());
    }

    #[test]
    fn single_team_is_neutral() {
        let r = compute_power_rankings(&[make_team(1, 3, 1)]);
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].rank, 1);
        assert_relative_eq!(r[0].power_score, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn ranks_are_contiguous_and_scores_non_increasing() {
        let rankings = compute_power_rankings(&league());
        let ranks: Vec<usize> = rankings.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, (1..=8).collect::<Vec<_>>());
        for pair in rankings.windows(2) {
            assert!(pair[0].power_score >= pair[1].power_score);
        }
        for r in &rankings {
            assert!((0.0..=100.0).contains(&r.power_score));
            let p = r.percentiles;
            for v in [p.efficiency, p.win_quality, p.margin, p.turnovers, p.schedule] {
                assert!((0.0..=100.0).contains(&v));
            }
            assert!(r.raw.capped_margin_per_game.abs() <= 21.0);
        }
    }

    #[test]
    fn rankings_are_idempotent() {
        let teams = league();
        assert_eq!(compute_power_rankings(&teams), compute_power_rankings(&teams));
    }

    #[test]
    fn better_record_alone_never_ranks_lower() {
        // Identical except for wins/losses
        let teams = vec![make_team(1, 1, 3), make_team(2, 3, 1), make_team(3, 2, 2)];
        let rankings = compute_power_rankings(&teams);
        let by_id = |id: TeamId| rankings.iter().find(|r| r.team_id == id).unwrap();
        assert!(by_id(2).percentiles.win_quality >= by_id(3).percentiles.win_quality);
        assert!(by_id(2).power_score >= by_id(3).power_score);
        assert!(by_id(3).power_score >= by_id(1).power_score);
        assert_eq!(rankings[0].team_id, 2);
    }

    #[test]
    fn equal_scores_keep_input_order() {
        let teams = vec![make_team(9, 2, 2), make_team(4, 2, 2), make_team(6, 2, 2)];
        let ids: Vec<TeamId> = compute_power_rankings(&teams)
            .iter()
            .map(|r| r.team_id)
            .collect();
        assert_eq!(ids, vec![9, 4, 6]);
    }

    #[test]
    fn four_team_hand_computed_example() {
        // Three 4-0 teams and one 3-1 team, everything else identical.
        let teams = vec![
            make_team(1, 4, 0),
            make_team(2, 4, 0),
            make_team(3, 3, 1),
            make_team(4, 4, 0),
        ];
        let rankings = compute_power_rankings(&teams);
        let by_id = |id: TeamId| rankings.iter().find(|r| r.team_id == id).unwrap();

        // Win%: one value below 1.0 → 1/3 × 100; nothing below 0.75 → 0
        assert_relative_eq!(by_id(1).percentiles.win_quality, 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(by_id(3).percentiles.win_quality, 0.0, epsilon = 1e-9);
        // Every other metric is tied at 0; score = 0.25 × 33.3… = 8.33 → 8.3
        assert_relative_eq!(by_id(1).power_score, 8.3, epsilon = 1e-9);
        assert_relative_eq!(by_id(3).power_score, 0.0, epsilon = 1e-9);
        assert_eq!(rankings[3].team_id, 3);
        assert_eq!(
            rankings.iter().map(|r| r.team_id).take(3).collect::<Vec<_>>(),
            vec![1, 2, 4]
        );
    }
}
