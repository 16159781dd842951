//! Growth metric categories, snapshots and timestamped history entries.

use crate::error::AnalyticsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six tracked growth dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthMetric {
    Wisdom,
    Creativity,
    Technical,
    Leadership,
    Emotional,
    Physical,
}

impl GrowthMetric {
    /// All metrics in canonical display order
    pub const ALL: [GrowthMetric; 6] = [
        GrowthMetric::Wisdom,
        GrowthMetric::Creativity,
        GrowthMetric::Technical,
        GrowthMetric::Leadership,
        GrowthMetric::Emotional,
        GrowthMetric::Physical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthMetric::Wisdom => "wisdom",
            GrowthMetric::Creativity => "creativity",
            GrowthMetric::Technical => "technical",
            GrowthMetric::Leadership => "leadership",
            GrowthMetric::Emotional => "emotional",
            GrowthMetric::Physical => "physical",
        }
    }

    /// Position in [`GrowthMetric::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Default for GrowthMetric {
    fn default() -> Self {
        Self::Wisdom
    }
}

impl fmt::Display for GrowthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthMetric {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        GrowthMetric::ALL
            .into_iter()
            .find(|m| m.as_str() == lowered)
            .ok_or_else(|| AnalyticsError::UnknownMetric(s.to_string()))
    }
}

/// Snapshot of all six growth dimensions.
///
/// Values are conventionally 0-100 but are not clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthMetrics {
    pub wisdom: f64,
    pub creativity: f64,
    pub technical: f64,
    pub leadership: f64,
    pub emotional: f64,
    pub physical: f64,
}

impl GrowthMetrics {
    /// Snapshot with every dimension at the same value
    pub fn uniform(value: f64) -> Self {
        Self {
            wisdom: value,
            creativity: value,
            technical: value,
            leadership: value,
            emotional: value,
            physical: value,
        }
    }

    pub fn get(&self, metric: GrowthMetric) -> f64 {
        match metric {
            GrowthMetric::Wisdom => self.wisdom,
            GrowthMetric::Creativity => self.creativity,
            GrowthMetric::Technical => self.technical,
            GrowthMetric::Leadership => self.leadership,
            GrowthMetric::Emotional => self.emotional,
            GrowthMetric::Physical => self.physical,
        }
    }

    pub fn set(&mut self, metric: GrowthMetric, value: f64) {
        let slot = match metric {
            GrowthMetric::Wisdom => &mut self.wisdom,
            GrowthMetric::Creativity => &mut self.creativity,
            GrowthMetric::Technical => &mut self.technical,
            GrowthMetric::Leadership => &mut self.leadership,
            GrowthMetric::Emotional => &mut self.emotional,
            GrowthMetric::Physical => &mut self.physical,
        };
        *slot = value;
    }

    /// Iterate `(metric, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (GrowthMetric, f64)> + '_ {
        GrowthMetric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Arithmetic mean of the six dimensions
    pub fn renaissance_score(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum::<f64>() / GrowthMetric::ALL.len() as f64
    }
}

/// Metrics snapshot at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalEntry {
    /// Epoch milliseconds
    pub timestamp: i64,
    pub metrics: GrowthMetrics,
}

impl HistoricalEntry {
    pub fn new(timestamp: i64, metrics: GrowthMetrics) -> Self {
        Self { timestamp, metrics }
    }
}
