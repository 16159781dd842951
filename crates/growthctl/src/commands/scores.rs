//! `growthctl wisdom` and `growthctl insight`

use anyhow::Result;
use growth_analytics::WisdomMetrics;

use crate::display::fmt_value;

pub fn wisdom(experience: f64, reflection: f64, application: f64, teaching: f64) -> Result<()> {
    let score = WisdomMetrics::wisdom_score(experience, reflection, application, teaching);
    println!("{}", fmt_value(score, 1));
    Ok(())
}

pub fn insight(curiosity: f64, knowledge: f64, creativity: f64, intuition: f64) -> Result<()> {
    let score = WisdomMetrics::insight_potential(curiosity, knowledge, creativity, intuition);
    println!("{}", fmt_value(score, 1));
    Ok(())
}
