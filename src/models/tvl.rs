use chrono::{DateTime, Utc};

/// One normalized TVL observation. The raw feed carries unix-seconds;
/// normalization converts to a proper timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TvlPoint {
    pub date: DateTime<Utc>,
    pub tvl: f64,
}

/// Headline numbers derived from the normalized series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvlMetrics {
    pub current: Option<f64>,
    pub previous: Option<f64>,
    /// Day-over-day change in percent, None unless both operands exist.
    pub percent_change: Option<f64>,
}

/// One chart column: calendar date label and rounded TVL.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSample {
    pub x: String,
    pub y: i64,
}
