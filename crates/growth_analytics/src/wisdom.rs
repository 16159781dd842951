//! Composite wisdom and insight scores.

use crate::metrics::GrowthMetrics;

/// Composite scores built from four 0-100 component values
pub struct WisdomMetrics;

impl WisdomMetrics {
    /// Geometric mean of four 0-100 components, on the same 0-100 scale.
    ///
    /// Each component is taken as a fraction of 100 before the product, so
    /// four perfect components score exactly 100. A zero in any component
    /// collapses the score to zero. Negative input gives NaN (fractional
    /// power of a negative product) and is not clamped.
    ///
    /// Note: `(e·r·a·t)^0.25 · 100` on the raw 0-100 values is exactly 100
    /// times this score.
    pub fn wisdom_score(experience: f64, reflection: f64, application: f64, teaching: f64) -> f64 {
        let product: f64 = [experience, reflection, application, teaching]
            .iter()
            .map(|v| v / 100.0)
            .product();
        product.powf(0.25) * 100.0
    }

    /// Wisdom score of a snapshot: wisdom as experience, emotional as
    /// reflection, leadership as application, creativity as teaching.
    pub fn wisdom_score_for(metrics: &GrowthMetrics) -> f64 {
        Self::wisdom_score(
            metrics.wisdom,
            metrics.emotional,
            metrics.leadership,
            metrics.creativity,
        )
    }

    /// Average of the four traits, boosted by up to 50% when they are
    /// balanced. A specialist with one high and three low scores earns less
    /// than a generalist with the same average.
    pub fn insight_potential(
        curiosity: f64,
        knowledge: f64,
        creativity: f64,
        intuition: f64,
    ) -> f64 {
        let traits = [curiosity, knowledge, creativity, intuition];
        let balance = 1.0 - population_std_dev(&traits) / 100.0;
        let average = traits.iter().sum::<f64>() / traits.len() as f64;
        average * (1.0 + balance * 0.5)
    }
}

/// Population standard deviation. Zero for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
