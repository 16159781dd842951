//! `growthctl correlate`

use anyhow::Result;
use growth_analytics::CorrelationMatrix;
use std::path::Path;

use crate::config::GrowthConfig;
use crate::display::{fmt_value, render_correlation, Palette};

pub fn run(history: &Path, json: bool, config: &GrowthConfig, palette: &Palette) -> Result<()> {
    let (history, _) = super::load_history(history, config.analysis.history_capacity)?;
    let matrix = CorrelationMatrix::from_history(history.entries());

    if json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
        return Ok(());
    }

    print!("{}", render_correlation(&matrix, palette));

    if let Some((a, b, r)) = matrix.strongest_pairs().first() {
        println!();
        println!("Strongest link: {} / {} ({})", a, b, fmt_value(*r, 2));
    }
    Ok(())
}
