//! Momentum and next-value prediction over a metric series.
//!
//! A series is a chronologically ordered slice of values for one growth
//! dimension. Short series (fewer than two points) fall back to a defined
//! default rather than failing.

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Extrapolation strategy for [`GrowthMathematics::predict_next_value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionMethod {
    /// Straight line through the first and last points
    Linear,
    /// Constant compound rate between the first and last points
    Exponential,
    /// Least-squares fit over all points.
    ///
    /// The fit is linear, not quadratic. The name is kept because existing
    /// dashboards depend on these numbers.
    Polynomial,
}

impl Default for PredictionMethod {
    fn default() -> Self {
        Self::Linear
    }
}

impl PredictionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMethod::Linear => "linear",
            PredictionMethod::Exponential => "exponential",
            PredictionMethod::Polynomial => "polynomial",
        }
    }
}

impl fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionMethod {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" => Ok(Self::Exponential),
            "polynomial" => Ok(Self::Polynomial),
            _ => Err(AnalyticsError::UnknownMethod(s.to_string())),
        }
    }
}

/// Trend and extrapolation math over a single series
pub struct GrowthMathematics;

impl GrowthMathematics {
    /// `initial * (1 + rate)^time`
    pub fn exponential_growth(initial: f64, rate: f64, time: f64) -> f64 {
        initial * (1.0 + rate).powf(time)
    }

    /// Logistic curve with the given carrying capacity, rate and midpoint
    pub fn logistic_growth(
        time: f64,
        carrying_capacity: f64,
        growth_rate: f64,
        midpoint: f64,
    ) -> f64 {
        carrying_capacity / (1.0 + (-growth_rate * (time - midpoint)).exp())
    }

    /// Average step change plus half the acceleration between the first
    /// and last step. Zero for fewer than two values.
    pub fn calculate_momentum(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let changes: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
        let avg_change = changes.iter().sum::<f64>() / changes.len() as f64;

        let acceleration = if changes.len() > 1 {
            (changes[changes.len() - 1] - changes[0]) / (changes.len() - 1) as f64
        } else {
            0.0
        };

        trace!(points = values.len(), avg_change, acceleration, "momentum");
        avg_change + acceleration * 0.5
    }

    /// Extrapolate one step past the end of the series.
    ///
    /// With fewer than two values returns the only value, or 0 for an empty
    /// series. `Exponential` yields NaN or infinity when the first value is
    /// zero or the ratio has no real root; that result is returned as is.
    pub fn predict_next_value(values: &[f64], method: PredictionMethod) -> f64 {
        let (first, last) = match (values.first(), values.last()) {
            (Some(&first), Some(&last)) if values.len() >= 2 => (first, last),
            _ => return values.first().copied().unwrap_or(0.0),
        };
        let steps = (values.len() - 1) as f64;

        match method {
            PredictionMethod::Linear => {
                let slope = (last - first) / steps;
                last + slope
            }
            PredictionMethod::Exponential => {
                let growth_rate = (last / first).powf(1.0 / steps) - 1.0;
                last * (1.0 + growth_rate)
            }
            PredictionMethod::Polynomial => {
                let (slope, intercept) = Self::least_squares(values);
                slope * values.len() as f64 + intercept
            }
        }
    }

    /// Predict using a method name, returning the last value unchanged when
    /// the name is not a known method.
    pub fn predict_by_name(values: &[f64], method: &str) -> f64 {
        match method.parse::<PredictionMethod>() {
            Ok(method) => Self::predict_next_value(values, method),
            Err(_) => values.last().copied().unwrap_or(0.0),
        }
    }

    /// Least-squares line over `(index, value)` pairs, as `(slope, intercept)`
    pub fn least_squares(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }

        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / n;
        (slope, intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_momentum_short_series() {
        assert_eq!(GrowthMathematics::calculate_momentum(&[]), 0.0);
        assert_eq!(GrowthMathematics::calculate_momentum(&[5.0]), 0.0);
    }

    #[test]
    fn test_momentum_constant_step() {
        assert_relative_eq!(
            GrowthMathematics::calculate_momentum(&[1.0, 2.0, 3.0, 4.0]),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_momentum_two_points_has_no_acceleration() {
        assert_relative_eq!(GrowthMathematics::calculate_momentum(&[10.0, 13.0]), 3.0);
    }

    #[test]
    fn test_momentum_accelerating() {
        // changes [1, 2, 4]: avg 7/3, acceleration (4-1)/2 = 1.5
        let momentum = GrowthMathematics::calculate_momentum(&[0.0, 1.0, 3.0, 7.0]);
        assert_relative_eq!(momentum, 7.0 / 3.0 + 0.75, epsilon = 1e-12);
    }

    #[test]
    fn test_predict_linear() {
        assert_eq!(GrowthMathematics::predict_next_value(&[10.0, 20.0], PredictionMethod::Linear), 30.0);
        assert_eq!(
            GrowthMathematics::predict_next_value(&[10.0, 20.0, 30.0], PredictionMethod::Linear),
            40.0
        );
    }

    #[test]
    fn test_predict_short_series_fallback() {
        for method in [
            PredictionMethod::Linear,
            PredictionMethod::Exponential,
            PredictionMethod::Polynomial,
        ] {
            assert_eq!(GrowthMathematics::predict_next_value(&[5.0], method), 5.0);
            assert_eq!(GrowthMathematics::predict_next_value(&[], method), 0.0);
        }
    }

    #[test]
    fn test_predict_exponential() {
        let next = GrowthMathematics::predict_next_value(&[10.0, 20.0, 40.0], PredictionMethod::Exponential);
        assert_relative_eq!(next, 80.0, epsilon = 1e-9);
    }

    #[test]
    fn test_predict_exponential_zero_start_is_non_finite() {
        let next = GrowthMathematics::predict_next_value(&[0.0, 10.0], PredictionMethod::Exponential);
        assert!(!next.is_finite());
    }

    #[test]
    fn test_predict_polynomial_is_linear_fit() {
        // perfectly linear data: fitted line equals the series
        let next = GrowthMathematics::predict_next_value(&[3.0, 5.0, 7.0, 9.0], PredictionMethod::Polynomial);
        assert_relative_eq!(next, 11.0, epsilon = 1e-9);

        // quadratic data still gets a straight line: slope 3, intercept -1
        let next = GrowthMathematics::predict_next_value(&[0.0, 1.0, 4.0, 9.0], PredictionMethod::Polynomial);
        assert_relative_eq!(next, 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_predict_by_name_unknown_returns_last() {
        assert_eq!(GrowthMathematics::predict_by_name(&[1.0, 2.0, 7.0], "cubic"), 7.0);
        assert_eq!(GrowthMathematics::predict_by_name(&[], "cubic"), 0.0);
        assert_eq!(GrowthMathematics::predict_by_name(&[10.0, 20.0], "LINEAR"), 30.0);
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("Polynomial".parse::<PredictionMethod>().unwrap(), PredictionMethod::Polynomial);
        assert!("quadratic".parse::<PredictionMethod>().is_err());
        assert_eq!(PredictionMethod::default(), PredictionMethod::Linear);
    }

    #[test]
    fn test_growth_curves() {
        assert_relative_eq!(GrowthMathematics::exponential_growth(100.0, 0.1, 2.0), 121.0, epsilon = 1e-9);
        assert_relative_eq!(GrowthMathematics::logistic_growth(5.0, 100.0, 1.0, 5.0), 50.0);
        assert!(GrowthMathematics::logistic_growth(50.0, 100.0, 1.0, 5.0) > 99.9);
    }

    #[test]
    fn test_deterministic() {
        let series = [12.5, 13.1, 15.8, 15.2, 19.9];
        let a = GrowthMathematics::predict_next_value(&series, PredictionMethod::Polynomial);
        let b = GrowthMathematics::predict_next_value(&series, PredictionMethod::Polynomial);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
