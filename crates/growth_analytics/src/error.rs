//! Error types for growth analytics.
//!
//! The math itself never fails; only name parsing and history I/O do.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error(
        "Unknown growth metric: '{0}'. \
         Valid values: wisdom, creativity, technical, leadership, emotional, physical"
    )]
    UnknownMetric(String),

    #[error("Unknown prediction method: '{0}'. Valid values: linear, exponential, polynomial")]
    UnknownMethod(String),

    #[error("Unknown timeframe: '{0}'. Valid values: week, month, quarter")]
    UnknownTimeframe(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
