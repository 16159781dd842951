//! Tests for the core growth math: momentum, prediction, correlation and
//! composite scores.

use approx::assert_relative_eq;
use growth_analytics::golden::{fibonacci, fibonacci_sequence, golden_ratio_spiral};
use growth_analytics::personality::{personality_distance, personality_vector, synergy};
use growth_analytics::{pearson_correlation, GrowthMathematics, PredictionMethod, WisdomMetrics};

#[test]
fn test_momentum_edge_cases() {
    assert_eq!(GrowthMathematics::calculate_momentum(&[]), 0.0);
    assert_eq!(GrowthMathematics::calculate_momentum(&[5.0]), 0.0);
    assert_eq!(GrowthMathematics::calculate_momentum(&[1.0, 2.0, 3.0, 4.0]), 1.0);
}

#[test]
fn test_momentum_declining_series() {
    // changes [-5, -5, -5]
    assert_eq!(GrowthMathematics::calculate_momentum(&[80.0, 75.0, 70.0, 65.0]), -5.0);
}

#[test]
fn test_linear_prediction() {
    assert_eq!(GrowthMathematics::predict_next_value(&[10.0, 20.0], PredictionMethod::Linear), 30.0);
    assert_eq!(GrowthMathematics::predict_next_value(&[10.0, 20.0, 30.0], PredictionMethod::Linear), 40.0);
    assert_eq!(GrowthMathematics::predict_next_value(&[5.0], PredictionMethod::Linear), 5.0);
}

#[test]
fn test_linear_prediction_ignores_interior_points() {
    let a = GrowthMathematics::predict_next_value(&[10.0, 99.0, 30.0], PredictionMethod::Linear);
    let b = GrowthMathematics::predict_next_value(&[10.0, 0.0, 30.0], PredictionMethod::Linear);
    assert_eq!(a, b);
}

#[test]
fn test_polynomial_uses_every_point() {
    let a = GrowthMathematics::predict_next_value(&[10.0, 99.0, 30.0], PredictionMethod::Polynomial);
    let b = GrowthMathematics::predict_next_value(&[10.0, 0.0, 30.0], PredictionMethod::Polynomial);
    assert!(a > b);
}

#[test]
fn test_exponential_negative_ratio_is_nan() {
    // (-20 / 10)^(1/2) has no real root
    let next = GrowthMathematics::predict_next_value(&[10.0, 5.0, -20.0], PredictionMethod::Exponential);
    assert!(next.is_nan());
}

#[test]
fn test_pearson_properties() {
    assert_relative_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 1.0);
    assert_relative_eq!(pearson_correlation(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0);
    assert_eq!(pearson_correlation(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), 0.0);
}

#[test]
fn test_pearson_is_bounded() {
    let x = [3.0, 7.5, 1.2, 9.9, 4.4, 6.1];
    let y = [2.2, 8.1, 0.5, 7.7, 5.0, 3.3];
    let r = pearson_correlation(&x, &y);
    assert!((-1.0..=1.0).contains(&r));
    assert!(r > 0.7);
    assert_relative_eq!(r, pearson_correlation(&y, &x), epsilon = 1e-12);
}

#[test]
fn test_wisdom_score_properties() {
    assert_relative_eq!(WisdomMetrics::wisdom_score(100.0, 100.0, 100.0, 100.0), 100.0, epsilon = 1e-9);
    assert_eq!(WisdomMetrics::wisdom_score(0.0, 100.0, 100.0, 100.0), 0.0);
}

#[test]
fn test_insight_potential_balanced() {
    assert_eq!(WisdomMetrics::insight_potential(50.0, 50.0, 50.0, 50.0), 75.0);
}

#[test]
fn test_results_are_bit_identical() {
    let series = [44.0, 47.5, 46.0, 52.25, 58.0, 57.5];
    for method in [PredictionMethod::Linear, PredictionMethod::Exponential, PredictionMethod::Polynomial] {
        let a = GrowthMathematics::predict_next_value(&series, method);
        let b = GrowthMathematics::predict_next_value(&series, method);
        assert_eq!(a.to_bits(), b.to_bits());
    }
    let m1 = GrowthMathematics::calculate_momentum(&series);
    let m2 = GrowthMathematics::calculate_momentum(&series);
    assert_eq!(m1.to_bits(), m2.to_bits());
    let w1 = WisdomMetrics::insight_potential(12.0, 80.0, 33.0, 64.0);
    let w2 = WisdomMetrics::insight_potential(12.0, 80.0, 33.0, 64.0);
    assert_eq!(w1.to_bits(), w2.to_bits());
}

#[test]
fn test_auxiliary_helpers() {
    assert_eq!(fibonacci(12), 144);
    assert_eq!(*fibonacci_sequence(13).last().unwrap(), 144);
    assert_eq!(golden_ratio_spiral(0).len(), 0);
    assert_eq!(golden_ratio_spiral(21).len(), 21);

    let a = personality_vector(&[("openness", 1.0), ("agreeableness", 1.0)]);
    let b = personality_vector(&[("openness", 1.0), ("agreeableness", 0.0)]);
    assert_relative_eq!(synergy(&a, &b), 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    assert!(personality_distance(&a, &b) > 0.0);
}
