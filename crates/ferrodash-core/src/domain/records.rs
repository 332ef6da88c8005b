use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::{CandleSize, StockId, Window};

const DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const DATE_TIME_T: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DATE_MINUTE: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const DATE_TIME_OFFSET: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// One dated observation of the series table. `None` is a missing cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: PrimitiveDateTime,
    pub close: Option<f64>,
    pub sma20: Option<f64>,
    pub upper: Option<f64>,
    pub lower: Option<f64>,
}

impl SeriesPoint {
    /// Parse the upstream `Date` column.
    ///
    /// Offset-qualified timestamps keep their wall-clock time, matching how
    /// the chart axis displays exchange-local dates.
    pub fn parse_date(input: &str) -> Option<PrimitiveDateTime> {
        let input = input.trim();
        if let Ok(date) = Date::parse(input, DATE_ONLY) {
            return Some(PrimitiveDateTime::new(date, Time::MIDNIGHT));
        }

        [DATE_TIME, DATE_TIME_T, DATE_MINUTE]
            .into_iter()
            .find_map(|format| PrimitiveDateTime::parse(input, format).ok())
            .or_else(|| {
                OffsetDateTime::parse(input, DATE_TIME_OFFSET)
                    .ok()
                    .map(|value| PrimitiveDateTime::new(value.date(), value.time()))
            })
    }

    /// Axis label in the `YYYY-MM-DD HH:MM:SS` form plotly parses as a date.
    pub fn axis_label(&self) -> String {
        self.date
            .format(DATE_TIME)
            .unwrap_or_else(|_| self.date.to_string())
    }
}

/// One row of the signals table.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalRow {
    pub stock: StockId,
    pub window: Window,
    pub candle: CandleSize,
    pub day: String,
    pub buy_close: Option<f64>,
    pub sell_open: Option<f64>,
}

impl SignalRow {
    pub fn matches(&self, stock: &StockId, window: &Window, candle: &CandleSize) -> bool {
        self.stock == *stock && self.window == *window && self.candle == *candle
    }
}
