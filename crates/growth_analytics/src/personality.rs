//! Personality trait vectors: normalization, distance and synergy.
//!
//! Vectors are compared by position only. Callers keep trait order
//! consistent; vectors of different lengths produce NaN.

/// Project named trait scores onto a unit vector, preserving input order.
///
/// All-zero traits have no direction and yield NaN components.
pub fn personality_vector(traits: &[(&str, f64)]) -> Vec<f64> {
    let magnitude = traits.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
    traits.iter().map(|(_, v)| v / magnitude).collect()
}

/// Euclidean distance between two trait vectors
pub fn personality_distance(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::NAN;
    }
    a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt()
}

/// Dot product of two trait vectors, floored at zero. NaN passes through.
pub fn synergy(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return f64::NAN;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    // f64::max would drop the NaN
    if dot.is_nan() || dot > 0.0 {
        dot
    } else {
        0.0
    }
}
