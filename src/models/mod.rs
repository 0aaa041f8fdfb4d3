pub mod tvl;
pub mod pool;

pub use tvl::{ChartSample, TvlMetrics, TvlPoint};
pub use pool::PoolRow;
