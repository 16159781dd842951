//! Tests for growth history export files and report assembly.

use approx::assert_relative_eq;
use growth_analytics::{
    AnalyticsReport, GrowthHistory, GrowthMetric, GrowthMetrics, HistoryExport, PredictionMethod,
    Timeframe, DAY_MS,
};
use tempfile::tempdir;

const NOW: i64 = 1_735_689_600_000;

fn sample_history() -> GrowthHistory {
    let mut history = GrowthHistory::default();
    for day in 0..30i64 {
        let t = day as f64;
        let metrics = GrowthMetrics {
            wisdom: 40.0 + t,
            creativity: 55.0 + 0.5 * t,
            technical: 70.0 - 0.25 * t,
            leadership: 30.0 + t,
            emotional: 60.0,
            physical: 45.0 + (day % 3) as f64,
        };
        history.record(NOW - (29 - day) * DAY_MS, metrics);
    }
    history
}

#[test]
fn test_export_roundtrip_through_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("history.json");

    let history = sample_history();
    let current = history.latest().unwrap().metrics;
    history.export(current).save(&path).unwrap();

    let loaded = HistoryExport::load(&path).unwrap();
    assert_eq!(loaded.current_metrics(), Some(current));
    assert!(loaded.export_date.is_some());

    let restored = loaded.into_history(30);
    assert_eq!(restored.entries(), history.entries());
}

#[test]
fn test_export_uses_dashboard_field_names() {
    let history = sample_history();
    let json = serde_json::to_value(history.export(GrowthMetrics::default())).unwrap();
    assert!(json.get("growthMetrics").is_some());
    assert!(json.get("exportDate").is_some());
    assert_eq!(json["historicalData"].as_array().unwrap().len(), 30);
}

#[test]
fn test_load_missing_file_errors() {
    let dir = tempdir().unwrap();
    assert!(HistoryExport::load(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_load_malformed_file_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        HistoryExport::load(&path),
        Err(growth_analytics::AnalyticsError::Json(_))
    ));
}

#[test]
fn test_rolling_window_keeps_thirty() {
    let mut history = sample_history();
    history.record(NOW + DAY_MS, GrowthMetrics::uniform(99.0));
    assert_eq!(history.len(), 30);
    assert_eq!(history.entries()[0].timestamp, NOW - 28 * DAY_MS);
}

#[test]
fn test_report_over_sample_history() {
    let history = sample_history();
    let current = history.latest().unwrap().metrics;
    let report = AnalyticsReport::build(
        &history,
        current,
        GrowthMetric::Wisdom,
        Timeframe::Week,
        PredictionMethod::Polynomial,
        NOW,
    );

    assert_eq!(report.trend.values.len(), 8);
    assert_relative_eq!(report.trend.momentum, 1.0, epsilon = 1e-9);
    assert_relative_eq!(report.trend.prediction, 70.0, epsilon = 1e-9);

    // wisdom and leadership move in lockstep, technical against them
    assert_relative_eq!(
        report.correlation.get(GrowthMetric::Wisdom, GrowthMetric::Leadership),
        1.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(
        report.correlation.get(GrowthMetric::Wisdom, GrowthMetric::Technical),
        -1.0,
        epsilon = 1e-9
    );
    // emotional never moves
    assert_eq!(report.correlation.get(GrowthMetric::Emotional, GrowthMetric::Wisdom), 0.0);

    assert_relative_eq!(report.renaissance_score, current.renaissance_score());
    assert_eq!(report.forecasts.len(), 6);
}
