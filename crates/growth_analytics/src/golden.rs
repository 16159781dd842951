//! Golden ratio helpers: Fibonacci numbers, spiral layout points and
//! compound growth rates.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// The golden ratio
pub const PHI: f64 = 1.618_033_988_749_895;

/// Nth Fibonacci number by plain recursion.
///
/// Runs in exponential time. Fine for the small indices the UI shows; use
/// [`fibonacci_sequence`] for anything larger.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

/// First `length` Fibonacci numbers starting from 0.
///
/// Values saturate at `u64::MAX` past the 93rd term.
pub fn fibonacci_sequence(length: usize) -> Vec<u64> {
    let mut sequence = Vec::with_capacity(length);
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..length {
        sequence.push(a);
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    sequence
}

/// Rate per period that takes `current` to `target` over `timeframe`
/// periods: `(target / current)^(1 / timeframe) - 1`.
pub fn optimal_growth_rate(current: f64, target: f64, timeframe: f64) -> f64 {
    (target / current).powf(1.0 / timeframe) - 1.0
}

/// One point on the golden-angle spiral
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpiralPoint {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Finite spiral of points spaced by the golden angle.
///
/// Clone the iterator (or build a new one) to restart it.
#[derive(Debug, Clone)]
pub struct GoldenSpiral {
    step: usize,
    steps: usize,
    angle: f64,
}

impl GoldenSpiral {
    pub fn new(steps: usize) -> Self {
        Self { step: 0, steps, angle: 0.0 }
    }

    fn angle_increment() -> f64 {
        2.0 * PI / PHI
    }
}

impl Iterator for GoldenSpiral {
    type Item = SpiralPoint;

    fn next(&mut self) -> Option<SpiralPoint> {
        if self.step >= self.steps {
            return None;
        }

        let r = (self.step as f64).sqrt() * 10.0;
        let point = SpiralPoint {
            x: r * self.angle.cos(),
            y: r * self.angle.sin(),
            radius: r / 10.0,
        };

        self.step += 1;
        self.angle += Self::angle_increment();
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.saturating_sub(self.step);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GoldenSpiral {}

/// Collect `steps` spiral points
pub fn golden_ratio_spiral(steps: usize) -> Vec<SpiralPoint> {
    GoldenSpiral::new(steps).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_phi() {
        assert_relative_eq!(PHI, (1.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
        assert_eq!(fibonacci(10), 55);
    }

    #[test]
    fn test_fibonacci_sequence_lengths() {
        assert!(fibonacci_sequence(0).is_empty());
        assert_eq!(fibonacci_sequence(1), vec![0]);
        assert_eq!(fibonacci_sequence(8), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_fibonacci_variants_agree() {
        let seq = fibonacci_sequence(20);
        for (n, value) in seq.iter().enumerate() {
            assert_eq!(fibonacci(n as u32), *value);
        }
    }

    #[test]
    fn test_fibonacci_sequence_saturates() {
        let seq = fibonacci_sequence(100);
        assert_eq!(seq.len(), 100);
        assert_eq!(seq[93], 12_200_160_415_121_876_738);
        assert_eq!(seq[99], u64::MAX);
    }

    #[test]
    fn test_spiral_geometry() {
        let points = golden_ratio_spiral(5);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], SpiralPoint { x: 0.0, y: 0.0, radius: 0.0 });
        // second point sits at radius 10, one golden angle round
        let golden_angle = 2.0 * PI / PHI;
        assert_relative_eq!(points[1].x, 10.0 * golden_angle.cos(), epsilon = 1e-12);
        assert_relative_eq!(points[1].y, 10.0 * golden_angle.sin(), epsilon = 1e-12);
        assert_relative_eq!(points[1].radius, 1.0);
        for (i, p) in points.iter().enumerate() {
            assert_relative_eq!(p.radius, (i as f64).sqrt(), epsilon = 1e-12);
            assert_relative_eq!((p.x * p.x + p.y * p.y).sqrt(), p.radius * 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_spiral_restartable() {
        let spiral = GoldenSpiral::new(4);
        assert_eq!(spiral.len(), 4);
        let first: Vec<_> = spiral.clone().collect();
        let second: Vec<_> = spiral.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_optimal_growth_rate() {
        assert_relative_eq!(optimal_growth_rate(100.0, 121.0, 2.0), 0.1, epsilon = 1e-12);
        assert!(optimal_growth_rate(0.0, 50.0, 3.0).is_infinite());
    }
}
