//! Growth analytics for Meta You dashboards.
//!
//! Pure numeric helpers over growth-metric history: momentum, next-value
//! prediction, correlation, composite wisdom/insight scores, plus a few
//! golden-ratio and personality-vector utilities.
//!
//! Nothing here holds state between calls. Degenerate input (a zero starting
//! value, a negative product under a fractional power) propagates NaN or
//! infinity instead of being masked; callers guard before display.

pub mod analysis;
pub mod correlation;
pub mod error;
pub mod golden;
pub mod growth;
pub mod history;
pub mod metrics;
pub mod personality;
pub mod wisdom;

pub use analysis::{
    breakthrough_probability, AnalyticsReport, MetricForecast, Timeframe, TrendAnalysis,
    TrendDirection,
};
pub use correlation::{pearson_correlation, CorrelationMatrix, CorrelationStrength};
pub use error::AnalyticsError;
pub use growth::{GrowthMathematics, PredictionMethod};
pub use history::{GrowthHistory, HistoryExport};
pub use metrics::{GrowthMetric, GrowthMetrics, HistoricalEntry};
pub use wisdom::WisdomMetrics;

/// Entries retained by a growth history before the oldest are dropped
pub const DEFAULT_HISTORY_CAPACITY: usize = 30;

/// One day in epoch milliseconds
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;
