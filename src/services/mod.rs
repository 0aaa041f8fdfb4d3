pub mod fetch;
pub mod tvl;
pub mod trending;

pub use fetch::{FetchSlot, FetchState};
