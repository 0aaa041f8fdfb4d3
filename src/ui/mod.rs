pub mod format;
pub mod chart;
pub mod table;

use serde_json::Value;

use crate::config::DisplayConfig;
use crate::services::FetchState;
use crate::services::{trending, tvl};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
pub(crate) const RESET: &str = "\x1b[0m";

/// Render one full dashboard frame from the two slot states. Pure output:
/// derivation happens here on whatever payloads are currently held, and a
/// failure in one section never affects the other.
pub fn render(tvl_state: &FetchState<Value>, pools_state: &FetchState<Value>, display: &DisplayConfig) {
    let points = tvl_state.data().map(tvl::normalize_history).unwrap_or_default();
    let rows = pools_state.data().map(trending::pool_rows).unwrap_or_default();
    let metrics = tvl::metrics(&points);
    let series = tvl::chart_series(&points, display.chart_points);

    // summary cards
    println!();
    let tvl_value = match tvl_state {
        FetchState::Idle | FetchState::Loading => "loading...".to_string(),
        FetchState::Failed(_) => "error".to_string(),
        FetchState::Ready(_) => match metrics.current {
            Some(now) => format::usd(now),
            None => "n/a".to_string(),
        },
    };
    let tvl_sub = metrics.percent_change.map(|pct| {
        let sign = if pct >= 0.0 { "+" } else { "" };
        format!("{}{:.2}% day", sign, pct)
    });
    card("current tvl", &tvl_value, tvl_sub.as_deref());

    let points_value = match tvl_state {
        FetchState::Idle | FetchState::Loading => "loading...".to_string(),
        FetchState::Failed(_) => "error".to_string(),
        FetchState::Ready(_) => format::group(points.len() as i64),
    };
    let since = tvl::since_label(&points).map(|d| format!("since {}", d));
    card("data points", &points_value, since.as_deref());

    let pools_value = match pools_state {
        FetchState::Idle | FetchState::Loading => "loading...".to_string(),
        FetchState::Failed(_) => "error".to_string(),
        FetchState::Ready(_) => format::group(rows.len() as i64),
    };
    let pools_sub = pools_state.error().map(|e| e.to_string());
    card("trending pools", &pools_value, pools_sub.as_deref());

    // tvl history chart
    println!();
    println!("  tvl history {}(last ~{} days){}", DIM, display.chart_points, RESET);
    match tvl_state {
        FetchState::Idle | FetchState::Loading => println!("  loading chart..."),
        FetchState::Failed(e) => println!("  {}failed to load tvl: {}{}", RED, e, RESET),
        FetchState::Ready(_) => chart::draw(&series, display.chart_height),
    }

    // trending pools table
    println!();
    println!("  trending pools {}(from geckoterminal){}", DIM, RESET);
    match pools_state {
        FetchState::Idle | FetchState::Loading => println!("  loading pools..."),
        FetchState::Failed(e) => println!("  {}failed to load trending pools: {}{}", RED, e, RESET),
        FetchState::Ready(_) => table::draw(&rows),
    }
    println!();
}

fn card(title: &str, value: &str, sub: Option<&str>) {
    match sub {
        Some(sub) => println!("  {:16} {:<16} {}{}{}", title, value, DIM, sub, RESET),
        None => println!("  {:16} {}", title, value),
    }
}

/// Green only for a present, non-negative change; a missing change takes
/// the negative color, same as the sign test failing.
pub(crate) fn change_color(change: Option<&str>) -> &'static str {
    match change {
        Some(c) if c.parse::<f64>().map(|v| v >= 0.0).unwrap_or(false) => GREEN,
        _ => RED,
    }
}
