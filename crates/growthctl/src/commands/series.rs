//! `growthctl momentum` and `growthctl predict`

use anyhow::Result;
use growth_analytics::{GrowthMathematics, PredictionMethod, TrendDirection};

use crate::display::{fmt_change, fmt_value, Palette};

pub fn momentum(values: &[f64], palette: &Palette) -> Result<()> {
    let momentum = GrowthMathematics::calculate_momentum(values);
    let direction = TrendDirection::from_momentum(momentum);
    let text = format!("{} {}", fmt_change(momentum, 3), direction.arrow());
    println!("{}", palette.trend(direction, &text));
    Ok(())
}

pub fn predict(values: &[f64], method: PredictionMethod) -> Result<()> {
    let next = GrowthMathematics::predict_next_value(values, method);
    println!("{}", fmt_value(next, 3));
    Ok(())
}
