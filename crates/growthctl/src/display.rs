//! Terminal rendering for analytics output.

use crate::config::ColorMode;
use growth_analytics::{
    AnalyticsReport, CorrelationMatrix, CorrelationStrength, GrowthMetric, TrendDirection,
};
use owo_colors::OwoColorize;
use std::fmt::Write;
use std::io::IsTerminal;

/// Whether to emit ANSI colors
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn trend(&self, direction: TrendDirection, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match direction {
            TrendDirection::Improving => text.green().to_string(),
            TrendDirection::Stable => text.cyan().to_string(),
            TrendDirection::Declining => text.red().to_string(),
        }
    }

    pub fn strength(&self, strength: CorrelationStrength, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        match strength {
            CorrelationStrength::Strong => text.green().to_string(),
            CorrelationStrength::Moderate => text.yellow().to_string(),
            CorrelationStrength::Weak => text.bright_black().to_string(),
            CorrelationStrength::Negative => text.red().to_string(),
        }
    }
}

/// Format a number with fixed decimals, or `n/a` when it is NaN or infinite
pub fn fmt_value(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        "n/a".to_string()
    }
}

/// Signed change, e.g. `+2.5` or `-1.0`
pub fn fmt_change(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    if value > 0.0 {
        format!("+{:.*}", decimals, value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

fn short_name(metric: GrowthMetric) -> &'static str {
    &metric.as_str()[..4]
}

pub fn render_correlation(matrix: &CorrelationMatrix, palette: &Palette) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:<12}", "");
    for metric in matrix.metrics {
        let _ = write!(out, "{:>6}", short_name(metric));
    }
    out.push('\n');

    for a in matrix.metrics {
        let _ = write!(out, "{:<12}", a.as_str());
        for b in matrix.metrics {
            let r = matrix.get(a, b);
            let cell = format!("{:>6}", fmt_value(r, 1));
            out.push_str(&palette.strength(CorrelationStrength::classify(r), &cell));
        }
        out.push('\n');
    }
    out
}

pub fn render_report(report: &AnalyticsReport, palette: &Palette) -> String {
    let mut out = String::new();
    let trend = &report.trend;

    let title = format!("Trend: {} ({})", trend.metric, trend.timeframe);
    let _ = writeln!(out, "{}", palette.heading(&title));
    let _ = writeln!(out, "  Data points  {}", trend.values.len());
    let _ = writeln!(out, "  Growth       {}%", fmt_change(trend.growth_percent, 1));
    let momentum = format!("{} {}", fmt_change(trend.momentum, 2), trend.direction.arrow());
    let _ = writeln!(out, "  Momentum     {}", palette.trend(trend.direction, &momentum));
    let _ = writeln!(out, "  Next ({})  {}", trend.method, fmt_value(trend.prediction, 1));
    out.push('\n');

    let _ = writeln!(out, "{}", palette.heading("Forecasts"));
    for forecast in &report.forecasts {
        let direction = if forecast.change > 0.0 {
            TrendDirection::Improving
        } else {
            TrendDirection::Declining
        };
        let breakthrough = format!(
            "breakthrough {}%",
            fmt_value(forecast.breakthrough_probability, 0)
        );
        let _ = writeln!(
            out,
            "  {:<12}{:>6}%  {}  {}",
            forecast.metric.as_str(),
            fmt_value(forecast.current, 0),
            palette.trend(direction, &format!("{:>7}%", fmt_change(forecast.change, 1))),
            palette.dim(&breakthrough),
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{}", palette.heading("Skill correlation"));
    out.push_str(&render_correlation(&report.correlation, palette));
    out.push('\n');

    let _ = writeln!(out, "Wisdom score      {}", fmt_value(report.wisdom_score, 0));
    let _ = writeln!(out, "Renaissance score {}", fmt_value(report.renaissance_score, 1));
    out
}
