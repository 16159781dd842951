//! Pearson correlation between metric series and the cross-metric matrix
//! shown on the analytics dashboard.

use crate::metrics::{GrowthMetric, HistoricalEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pearson correlation coefficient of two equal-length series.
///
/// Returns 0 when lengths differ, when the series are empty, or when either
/// series has zero variance.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }

    let n = x.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 {
        return 0.0;
    }

    numerator / denominator
}

/// Display band for a correlation value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    /// r > 0.7
    Strong,
    /// 0.3 < r <= 0.7
    Moderate,
    /// -0.3 < r <= 0.3
    Weak,
    /// r <= -0.3
    Negative,
}

impl CorrelationStrength {
    pub fn classify(r: f64) -> Self {
        if r > 0.7 {
            Self::Strong
        } else if r > 0.3 {
            Self::Moderate
        } else if r > -0.3 {
            Self::Weak
        } else {
            Self::Negative
        }
    }
}

/// Pairwise correlation of every growth metric against every other
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Row/column order
    pub metrics: [GrowthMetric; 6],
    pub values: [[f64; 6]; 6],
}

impl CorrelationMatrix {
    /// Build from the full history. The diagonal is fixed at 1.
    pub fn from_history(entries: &[HistoricalEntry]) -> Self {
        let series: Vec<Vec<f64>> = GrowthMetric::ALL
            .iter()
            .map(|&m| entries.iter().map(|e| e.metrics.get(m)).collect())
            .collect();

        let mut values = [[0.0; 6]; 6];
        for i in 0..6 {
            values[i][i] = 1.0;
            for j in (i + 1)..6 {
                let r = pearson_correlation(&series[i], &series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        debug!(entries = entries.len(), "Built correlation matrix");
        Self {
            metrics: GrowthMetric::ALL,
            values,
        }
    }

    pub fn get(&self, a: GrowthMetric, b: GrowthMetric) -> f64 {
        self.values[a.index()][b.index()]
    }

    pub fn strength(&self, a: GrowthMetric, b: GrowthMetric) -> CorrelationStrength {
        CorrelationStrength::classify(self.get(a, b))
    }

    /// Off-diagonal pairs sorted by descending absolute correlation
    pub fn strongest_pairs(&self) -> Vec<(GrowthMetric, GrowthMetric, f64)> {
        let mut pairs = Vec::with_capacity(15);
        for i in 0..6 {
            for j in (i + 1)..6 {
                pairs.push((self.metrics[i], self.metrics[j], self.values[i][j]));
            }
        }
        pairs.sort_by(|a, b| b.2.abs().total_cmp(&a.2.abs()));
        pairs
    }
}
