use thiserror::Error;

use crate::models::TeamId;

/// Precondition failures the caller must handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// A game references a team that was never ranked
    #[error("team {team_id} is missing from the power rankings")]
    MissingData { team_id: TeamId },

    #[error("no eligible games for Game of the Week ({candidates} candidate(s) lacked data)")]
    NoEligibleGames { candidates: usize },
}
