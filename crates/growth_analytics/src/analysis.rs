//! Trend, forecast and report assembly for the analytics dashboard.
//!
//! Combines the primitives in [`crate::growth`], [`crate::correlation`] and
//! [`crate::wisdom`] over a [`GrowthHistory`]. Time is passed in explicitly
//! as epoch milliseconds so results are reproducible.

use crate::correlation::CorrelationMatrix;
use crate::error::AnalyticsError;
use crate::growth::{GrowthMathematics, PredictionMethod};
use crate::history::GrowthHistory;
use crate::metrics::{GrowthMetric, GrowthMetrics};
use crate::wisdom::WisdomMetrics;
use crate::DAY_MS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Momentum inside this band counts as stable
const STABLE_MOMENTUM_BAND: f64 = 0.5;

/// Lookback window for trend analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    Month,
    Quarter,
}

impl Default for Timeframe {
    fn default() -> Self {
        Self::Month
    }
}

impl Timeframe {
    pub fn days(&self) -> i64 {
        match self {
            Timeframe::Week => 7,
            Timeframe::Month => 30,
            Timeframe::Quarter => 90,
        }
    }

    /// Oldest timestamp inside the window ending at `now_ms`
    pub fn cutoff(&self, now_ms: i64) -> i64 {
        now_ms - self.days() * DAY_MS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Week => "week",
            Timeframe::Month => "month",
            Timeframe::Quarter => "quarter",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            _ => Err(AnalyticsError::UnknownTimeframe(s.to_string())),
        }
    }
}

/// Direction of a metric trend, from its momentum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

impl TrendDirection {
    pub fn from_momentum(momentum: f64) -> Self {
        if momentum > STABLE_MOMENTUM_BAND {
            Self::Improving
        } else if momentum < -STABLE_MOMENTUM_BAND {
            Self::Declining
        } else {
            Self::Stable
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "↗",
            TrendDirection::Stable => "→",
            TrendDirection::Declining => "↘",
        }
    }
}

/// Trend of one metric over a timeframe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub metric: GrowthMetric,
    pub timeframe: Timeframe,
    pub method: PredictionMethod,
    /// Metric values inside the window, oldest first
    pub values: Vec<f64>,
    pub momentum: f64,
    pub prediction: f64,
    /// Change from first to last value in percent of the first.
    /// Non-finite when the first value is zero.
    pub growth_percent: f64,
    pub direction: TrendDirection,
}

impl TrendAnalysis {
    pub fn compute(
        history: &GrowthHistory,
        metric: GrowthMetric,
        timeframe: Timeframe,
        now_ms: i64,
        method: PredictionMethod,
    ) -> Self {
        let values: Vec<f64> = history
            .since(timeframe.cutoff(now_ms))
            .iter()
            .map(|e| e.metrics.get(metric))
            .collect();

        let momentum = GrowthMathematics::calculate_momentum(&values);
        let prediction = GrowthMathematics::predict_next_value(&values, method);
        let growth_percent = growth_percent(&values);

        debug!(%metric, %timeframe, points = values.len(), momentum, "Computed trend");

        Self {
            metric,
            timeframe,
            method,
            values,
            momentum,
            prediction,
            growth_percent,
            direction: TrendDirection::from_momentum(momentum),
        }
    }
}

fn growth_percent(values: &[f64]) -> f64 {
    match (values.first(), values.last()) {
        (Some(first), Some(last)) if values.len() > 1 => (last - first) / first * 100.0,
        _ => 0.0,
    }
}

/// Chance of a breakthrough for a metric value: 0 at 60 or below,
/// rising 2 points per point above 60, capped at 100.
pub fn breakthrough_probability(value: f64) -> f64 {
    ((value - 60.0) * 2.0).clamp(0.0, 100.0)
}

/// Next-value forecast for one metric over the full history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricForecast {
    pub metric: GrowthMetric,
    pub current: f64,
    pub prediction: f64,
    /// `prediction - current`
    pub change: f64,
    pub breakthrough_probability: f64,
}

impl MetricForecast {
    pub fn for_all(
        history: &GrowthHistory,
        current: &GrowthMetrics,
        method: PredictionMethod,
    ) -> Vec<MetricForecast> {
        current
            .iter()
            .map(|(metric, value)| {
                let series = history.series(metric);
                let prediction = GrowthMathematics::predict_next_value(&series, method);
                MetricForecast {
                    metric,
                    current: value,
                    prediction,
                    change: prediction - value,
                    breakthrough_probability: breakthrough_probability(value),
                }
            })
            .collect()
    }
}

/// Everything the analytics dashboard shows for one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Epoch milliseconds the report was computed for
    pub generated_at: i64,
    pub current: GrowthMetrics,
    pub trend: TrendAnalysis,
    pub forecasts: Vec<MetricForecast>,
    pub correlation: CorrelationMatrix,
    pub wisdom_score: f64,
    pub renaissance_score: f64,
}

impl AnalyticsReport {
    pub fn build(
        history: &GrowthHistory,
        current: GrowthMetrics,
        metric: GrowthMetric,
        timeframe: Timeframe,
        method: PredictionMethod,
        now_ms: i64,
    ) -> Self {
        Self {
            generated_at: now_ms,
            current,
            trend: TrendAnalysis::compute(history, metric, timeframe, now_ms, method),
            forecasts: MetricForecast::for_all(history, &current, method),
            correlation: CorrelationMatrix::from_history(history.entries()),
            wisdom_score: WisdomMetrics::wisdom_score_for(&current),
            renaissance_score: current.renaissance_score(),
        }
    }
}
