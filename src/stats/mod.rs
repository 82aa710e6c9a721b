//! Column statistics.
//!
//! Reduces a numeric column to (max, min, average) and prints the summary
//! line operators watch during a masking run. The masking engine feeds the
//! billing average back into the output, so the rounded values here are part
//! of the pipeline, not just display.

/// Aggregated statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Largest value, rounded to 2 decimal places.
    pub max: f64,
    /// Smallest value, rounded to 2 decimal places.
    pub min: f64,
    /// Mean value, rounded to 1 decimal place.
    pub average: f64,
}

impl ColumnStats {
    fn zero() -> Self {
        Self {
            max: 0.0,
            min: 0.0,
            average: 0.0,
        }
    }
}

/// Compute max/min/average for a column and print the summary line.
///
/// An empty input yields all zeros rather than an error. Halfway values
/// round away from zero (`f64::round`).
///
/// The summary line goes to stdout and is part of the tool's observable
/// interface:
///
/// ```text
/// Billing: Max. 200.75, Min. 100.5, Avg. 150.6
/// ```
pub fn compute_stats(label: &str, values: &[f64]) -> ColumnStats {
    let stats = if values.is_empty() {
        ColumnStats::zero()
    } else {
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let sum: f64 = values.iter().sum();

        ColumnStats {
            max: round_to(max, 2),
            min: round_to(min, 2),
            average: round_to(sum / values.len() as f64, 1),
        }
    };

    println!(
        "{}: Max. {}, Min. {}, Avg. {}",
        label, stats.max, stats.min, stats.average
    );

    stats
}

/// Round to `places` decimal places, ties away from zero.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_all_zero() {
        let stats = compute_stats("x", &[]);
        assert_eq!(
            stats,
            ColumnStats {
                max: 0.0,
                min: 0.0,
                average: 0.0
            }
        );
    }

    #[test]
    fn test_two_billing_values() {
        let stats = compute_stats("x", &[100.50, 200.75]);
        assert_eq!(stats.max, 200.75);
        assert_eq!(stats.min, 100.50);
        assert_eq!(stats.average, 150.6);
    }

    #[test]
    fn test_single_value() {
        let stats = compute_stats("x", &[42.0]);
        assert_eq!(stats.max, 42.0);
        assert_eq!(stats.min, 42.0);
        assert_eq!(stats.average, 42.0);
    }

    #[test]
    fn test_average_rounds_to_one_place() {
        // mean 0.25 -> 0.3 (tie rounds away from zero)
        let stats = compute_stats("x", &[0.25, 0.25]);
        assert_eq!(stats.average, 0.3);
    }

    #[test]
    fn test_max_min_round_to_two_places() {
        let stats = compute_stats("x", &[1.234, 9.876]);
        assert_eq!(stats.max, 9.88);
        assert_eq!(stats.min, 1.23);
    }
}
