//! Identifier newtypes and row records of the three datasets.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockId`] | Stock key shared by the series, summary and signals tables |
//! | [`Window`] | Signal aggregation interval (`100day`, `3minute`, ...) |
//! | [`CandleSize`] | Sub-grouping inside a window (`day`, `5minute`, ...) |
//! | [`SeriesPoint`] | One dated close/SMA20/upper/lower observation |
//! | [`SignalRow`] | One day-label row of buy/sell signal returns |

mod records;
mod stock;
mod window;

pub use records::{SeriesPoint, SignalRow};
pub use stock::StockId;
pub use window::{CandleSize, Window};
