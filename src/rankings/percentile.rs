/// Percentile position of `value` within `population`, on a 0–100 scale.
///
/// Counts the values strictly below `value` and divides by `n - 1`. Tied values
/// therefore share the percentile of the lowest member of their group, and the
/// top of the league only reaches 100 when it stands alone. Populations of one
/// (or none) return the neutral 50.
pub fn percentile(value: f64, population: &[f64]) -> f64 {
    let n = population.len();
    if n <= 1 {
        return 50.0;
    }
    let mut sorted = population.to_vec();
    sorted.sort_by(f64::total_cmp);
    let below = sorted.partition_point(|v| *v < value);
    (below as f64 / (n - 1) as f64 * 100.0).clamp(0.0, 100.0)
}

/// Percentile of every member of `population`, in input order.
pub fn percentiles(population: &[f64]) -> Vec<f64> {
    population
        .iter()
        .map(|v| percentile(*v, population))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distinct_values_span_full_range() {
        let pop = [3.0, 1.0, 4.0, 2.0];
        let p = percentiles(&pop);
        assert_relative_eq!(p[0], 200.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(p[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(p[2], 100.0, epsilon = 1e-9);
        assert_relative_eq!(p[3], 100.0 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn ties_share_the_count_below_the_group() {
        // Three 4-0 teams and one 3-1 team.
        let pop = [1.0, 1.0, 0.75, 1.0];
        let p = percentiles(&pop);
        // One value below each 1.0 → 1 / 3 × 100
        assert_relative_eq!(p[0], 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(p[1], 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(p[3], 100.0 / 3.0, epsilon = 1e-9);
        assert_relative_eq!(p[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn not_an_average_rank() {
        // A mid-rank convention would put the tied pair at 75.0
        let p = percentiles(&[0.0, 5.0, 5.0]);
        assert_relative_eq!(p[1], 50.0, epsilon = 1e-9);
        let p = percentiles(&[0.0, 5.0, 5.0, 9.0, 9.0]);
        assert_relative_eq!(p[3], 75.0, epsilon = 1e-9);
    }

    #[test]
    fn single_or_empty_population_is_neutral() {
        assert_relative_eq!(percentile(7.0, &[7.0]), 50.0, epsilon = 1e-9);
        assert_relative_eq!(percentile(7.0, &[]), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn all_equal_population_is_zero() {
        for p in percentiles(&[0.5; 6]) {
            assert_relative_eq!(p, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn always_within_bounds() {
        let pop: Vec<f64> = (0..32).map(|i| ((i * 37) % 11) as f64 - 5.0).collect();
        for p in percentiles(&pop) {
            assert!((0.0..=100.0).contains(&p), "out of range: {}", p);
        }
        // Values outside the population still clamp
        assert!(percentile(1e9, &pop) <= 100.0);
        assert!(percentile(-1e9, &pop) >= 0.0);
    }
}
