use chrono::DateTime;
use serde_json::Value;

use crate::models::{ChartSample, TvlMetrics, TvlPoint};

/// Normalize the raw TVL payload: anything that is not an array becomes an
/// empty series; entries keep only when both fields are JSON numbers; dates
/// are unix-seconds and come out sorted ascending. Duplicates pass through.
pub fn normalize_history(raw: &Value) -> Vec<TvlPoint> {
    let items = match raw.as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };

    let mut points: Vec<TvlPoint> = items
        .iter()
        .filter_map(|item| {
            let secs = item.get("date").and_then(Value::as_f64)?;
            let tvl = item.get("tvl").and_then(Value::as_f64)?;
            let date = DateTime::from_timestamp_millis((secs * 1000.0) as i64)?;
            Some(TvlPoint { date, tvl })
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}

/// Current/previous/percent-change off the series tail. The denominator is
/// floored at 1.0 so a zero previous TVL cannot blow up the percentage.
pub fn metrics(points: &[TvlPoint]) -> TvlMetrics {
    let current = points.last().map(|p| p.tvl);
    let previous = if points.len() > 1 {
        Some(points[points.len() - 2].tvl)
    } else {
        None
    };
    let percent_change = match (current, previous) {
        (Some(now), Some(prev)) => Some((now - prev) / f64::max(1.0, prev) * 100.0),
        _ => None,
    };

    TvlMetrics { current, previous, percent_change }
}

/// Last `limit` points as chart columns, order preserved, values rounded.
pub fn chart_series(points: &[TvlPoint], limit: usize) -> Vec<ChartSample> {
    let start = points.len().saturating_sub(limit);
    points[start..]
        .iter()
        .map(|p| ChartSample {
            x: p.date.format("%Y-%m-%d").to_string(),
            y: p.tvl.round() as i64,
        })
        .collect()
}

/// "since YYYY-MM-DD" label source: the first point's calendar date.
pub fn since_label(points: &[TvlPoint]) -> Option<String> {
    points.first().map(|p| p.date.format("%Y-%m-%d").to_string())
}
