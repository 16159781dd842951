//! Rolling growth history and its JSON export document.

use crate::error::AnalyticsError;
use crate::metrics::{GrowthMetric, GrowthMetrics, HistoricalEntry};
use crate::DEFAULT_HISTORY_CAPACITY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Chronological metric snapshots, capped at `capacity` entries
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthHistory {
    entries: Vec<HistoricalEntry>,
    capacity: usize,
}

impl Default for GrowthHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl GrowthHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Build from existing entries, keeping only the newest `capacity`
    pub fn from_entries(entries: Vec<HistoricalEntry>, capacity: usize) -> Self {
        let mut history = Self::new(capacity);
        history.entries = entries;
        history.trim();
        history
    }

    /// Append a snapshot, dropping the oldest entries past capacity
    pub fn push(&mut self, entry: HistoricalEntry) {
        self.entries.push(entry);
        self.trim();
    }

    /// Record `metrics` as the newest entry at `timestamp`
    pub fn record(&mut self, timestamp: i64, metrics: GrowthMetrics) {
        self.push(HistoricalEntry::new(timestamp, metrics));
    }

    fn trim(&mut self) {
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(0..excess);
            debug!(dropped = excess, capacity = self.capacity, "Trimmed growth history");
        }
    }

    pub fn entries(&self) -> &[HistoricalEntry] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoricalEntry> {
        self.entries.last()
    }

    /// Values of one metric across all entries
    pub fn series(&self, metric: GrowthMetric) -> Vec<f64> {
        self.entries.iter().map(|e| e.metrics.get(metric)).collect()
    }

    /// Entries with `timestamp >= cutoff_ms`, in order
    pub fn since(&self, cutoff_ms: i64) -> Vec<HistoricalEntry> {
        self.entries
            .iter()
            .filter(|e| e.timestamp >= cutoff_ms)
            .copied()
            .collect()
    }

    /// Export document for this history and the current snapshot
    pub fn export(&self, current: GrowthMetrics) -> HistoryExport {
        HistoryExport {
            growth_metrics: Some(current),
            historical_data: self.entries.clone(),
            export_date: Some(Utc::now()),
        }
    }
}

/// On-disk JSON shape of an exported history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_metrics: Option<GrowthMetrics>,
    #[serde(default)]
    pub historical_data: Vec<HistoricalEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_date: Option<DateTime<Utc>>,
}

impl HistoryExport {
    pub fn load(path: &Path) -> Result<Self, AnalyticsError> {
        let contents = fs::read_to_string(path)?;
        let export: HistoryExport = serde_json::from_str(&contents)?;
        debug!(
            path = %path.display(),
            entries = export.historical_data.len(),
            "Loaded history export"
        );
        Ok(export)
    }

    pub fn save(&self, path: &Path) -> Result<(), AnalyticsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Current snapshot, falling back to the history entry with the latest
    /// timestamp. File order is not assumed to be chronological.
    pub fn current_metrics(&self) -> Option<GrowthMetrics> {
        self.growth_metrics.or_else(|| {
            self.historical_data
                .iter()
                .max_by_key(|e| e.timestamp)
                .map(|e| e.metrics)
        })
    }

    pub fn into_history(self, capacity: usize) -> GrowthHistory {
        let mut entries = self.historical_data;
        entries.sort_by_key(|e| e.timestamp);
        GrowthHistory::from_entries(entries, capacity)
    }
}
