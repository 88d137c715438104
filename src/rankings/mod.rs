pub mod metrics;
pub mod percentile;
pub mod power;

pub use power::compute_power_rankings;
