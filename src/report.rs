use chrono::Utc;
use tracing::warn;

use crate::models::{AnalyticsReport, SeasonSnapshot};
use crate::predict::{predict_week, select_game_of_the_week};
use crate::rankings::compute_power_rankings;

/// Run the full pipeline over one snapshot: rank, predict, pick a GOTW.
///
/// A missing Game of the Week is reported as `None`; the rest of the report
/// is still produced.
pub fn build_report(snapshot: &SeasonSnapshot, week: Option<u32>) -> AnalyticsReport {
    let rankings = compute_power_rankings(&snapshot.teams);
    let standings = snapshot.standings();
    let games = snapshot.games_for_week(week);

    let weekly = predict_week(&games, &snapshot.teams, &rankings, &standings);
    let game_of_the_week =
        match select_game_of_the_week(&games, &weekly.predictions, &rankings, &standings) {
            Ok(selection) => Some(selection),
            Err(e) => {
                warn!("No Game of the Week: {}", e);
                None
            }
        };

    AnalyticsReport {
        generated_at: Utc::now(),
        rankings,
        predictions: weekly.predictions,
        skipped_games: weekly.skipped,
        game_of_the_week,
    }
}
