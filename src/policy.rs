//! Fixed weights and thresholds used by the ranking and prediction models.
//!
//! None of these are learned or configurable at runtime. They live here so
//! that every model reads the same numbers and tests can refer to them by name.

/// Weights of the five percentile components in the power score.
#[derive(Debug, Clone, Copy)]
pub struct PowerWeights {
    /// Net yards per play
    pub efficiency: f64,
    /// Win percentage
    pub win_quality: f64,
    /// Capped margin of victory per game
    pub margin: f64,
    /// Turnover differential per game
    pub turnovers: f64,
    /// Opponent win percentage
    pub schedule: f64,
    /// Absolute cap applied to margin of victory per game
    pub margin_cap: f64,
}

pub const POWER: PowerWeights = PowerWeights {
    efficiency: 0.30,
    win_quality: 0.25,
    margin: 0.15,
    turnovers: 0.15,
    schedule: 0.15,
    margin_cap: 21.0,
};

#[derive(Debug, Clone, Copy)]
pub struct PredictorTuning {
    /// Points per game assumed for a team that has not played
    pub league_avg_points: f64,
    pub defense_factor: f64,
    pub power_factor: f64,
    pub home_field: f64,
    pub confidence_base: f64,
    pub confidence_per_power_point: f64,
    pub confidence_per_score_point: f64,
    pub confidence_min: f64,
    pub confidence_max: f64,
    /// Power gap above which the rationale calls it significant
    pub significant_gap: f64,
    pub moderate_gap: f64,
}

pub const PREDICTOR: PredictorTuning = PredictorTuning {
    league_avg_points: 24.0,
    defense_factor: 4.0,
    power_factor: 3.0,
    home_field: 2.5,
    confidence_base: 50.0,
    confidence_per_power_point: 0.5,
    confidence_per_score_point: 2.0,
    confidence_min: 55.0,
    confidence_max: 95.0,
    significant_gap: 10.0,
    moderate_gap: 5.0,
};

#[derive(Debug, Clone, Copy)]
pub struct GotwTuning {
    pub power_divisor: f64,
    pub power_points: f64,
    pub power_trigger: f64,
    pub record_points: f64,
    pub record_trigger: f64,
    pub balance_points: f64,
    pub balance_trigger: usize,
    pub top_rank: usize,
    pub top_bonus: f64,
    pub undefeated_bonus: f64,
}

pub const GOTW: GotwTuning = GotwTuning {
    power_divisor: 140.0,
    power_points: 40.0,
    power_trigger: 120.0,
    record_points: 20.0,
    record_trigger: 0.75,
    balance_points: 20.0,
    balance_trigger: 5,
    top_rank: 10,
    top_bonus: 10.0,
    undefeated_bonus: 10.0,
};
