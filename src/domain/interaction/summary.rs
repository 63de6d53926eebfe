use serde::{Deserialize, Serialize};

/// Derived (never persisted) summary of a recipe's social interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSummary {
    pub likes_count: i64,
    pub rating: RatingSummary,
    pub comments_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Arithmetic mean in [0, 5]; exactly 0.0 when there are no ratings.
    pub average: f64,
    pub count: i64,
}

impl RatingSummary {
    /// Computes the mean of the given rating values, guarding the empty
    /// aggregate so the average is 0.0 rather than NaN.
    pub fn from_values(values: &[i32]) -> Self {
        let count = values.len() as i64;
        let average = if values.is_empty() {
            0.0
        } else {
            values.iter().map(|v| *v as i64).sum::<i64>() as f64 / count as f64
        };
        Self { average, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_known_values() {
        let summary = RatingSummary::from_values(&[3, 5, 4]);
        assert_eq!(summary.average, 4.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn empty_aggregate_is_zero_not_nan() {
        let summary = RatingSummary::from_values(&[]);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.count, 0);
        assert!(!summary.average.is_nan());
    }
}
