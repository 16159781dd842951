//! Command modules for growthctl
//!
//! - report: full analytics report over an exported history
//! - series: momentum and next-value prediction for ad-hoc values
//! - correlate: skill correlation matrix
//! - scores: wisdom and insight composite scores
//! - golden: Fibonacci numbers and spiral points
//! - config: show or change settings

pub mod config;
pub mod correlate;
pub mod golden;
pub mod report;
pub mod scores;
pub mod series;

use anyhow::{Context, Result};
use growth_analytics::{GrowthHistory, GrowthMetrics, HistoryExport};
use std::path::Path;

/// Load an export file into a capped history plus its current snapshot
pub fn load_history(path: &Path, capacity: usize) -> Result<(GrowthHistory, GrowthMetrics)> {
    let export = HistoryExport::load(path)
        .with_context(|| format!("Failed to load history from {}", path.display()))?;
    let current = export.current_metrics().unwrap_or_default();
    Ok((export.into_history(capacity), current))
}
