//! `growthctl report`

use anyhow::Result;
use growth_analytics::{AnalyticsReport, GrowthMetric, PredictionMethod, Timeframe};
use std::path::Path;
use tracing::info;

use crate::config::GrowthConfig;
use crate::display::{render_report, Palette};

pub struct ReportArgs<'a> {
    pub history: &'a Path,
    pub metric: Option<GrowthMetric>,
    pub timeframe: Option<Timeframe>,
    pub method: Option<PredictionMethod>,
    pub now_ms: i64,
    pub json: bool,
}

pub fn run(args: ReportArgs<'_>, config: &GrowthConfig, palette: &Palette) -> Result<()> {
    let (history, current) = super::load_history(args.history, config.analysis.history_capacity)?;
    info!(entries = history.len(), "Building analytics report");

    let report = AnalyticsReport::build(
        &history,
        current,
        args.metric.unwrap_or(config.analysis.default_metric),
        args.timeframe.unwrap_or(config.analysis.default_timeframe),
        args.method.unwrap_or(config.analysis.prediction_method),
        args.now_ms,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_report(&report, palette));
    }
    Ok(())
}
