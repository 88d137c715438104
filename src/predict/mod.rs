pub mod game;
pub mod gotw;

pub use game::{predict_game, predict_week, WeeklyPredictions};
pub use gotw::select_game_of_the_week;
