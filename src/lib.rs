//! Power rankings and game predictions for a simulated football league.
//!
//! The engine is a set of pure functions over a season snapshot: raw metrics
//! are percentile-normalized into a weighted power score, which then drives a
//! heuristic game predictor and the Game of the Week pick. Nothing here does
//! I/O; [`report::build_report`] wires the pieces together for the binary.

pub mod error;
pub mod models;
pub mod policy;
pub mod predict;
pub mod rankings;
pub mod report;

pub use error::AnalyticsError;
pub use predict::{predict_game, predict_week, select_game_of_the_week};
pub use rankings::compute_power_rankings;
