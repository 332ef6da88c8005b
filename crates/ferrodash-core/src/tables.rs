//! Table reshapers: summary transposition and signal aggregation.
//!
//! Every signal table ends with a `Total` row holding the column sums
//! rounded to two decimals. Missing cells are skipped by the sums.

use serde::{Deserialize, Serialize};

use crate::dataset::{SignalsTable, SummaryTable};
use crate::{CandleSize, SignalRow, StockId, Window};

/// Value shown for every metric when no stock is selected.
pub const PLACEHOLDER: &str = "--";

/// Day label of the appended aggregate row.
pub const TOTAL_LABEL: &str = "Total";

/// Column ids of the summary table.
pub const SUMMARY_COLUMNS: [&str; 2] = ["Metric", "Value"];

/// Column ids of every signal table.
pub const SIGNAL_COLUMNS: [&str; 3] = ["day", "buyClose", "sellOpen"];

/// A fixed "100 Day Window" panel: the candle size it shows and its heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixedPanel {
    pub candle: &'static str,
    pub title: &'static str,
}

impl FixedPanel {
    pub fn candle_size(&self) -> CandleSize {
        CandleSize::from_static(self.candle)
    }
}

pub const FIXED_PANELS: [FixedPanel; 4] = [
    FixedPanel {
        candle: "day",
        title: "1 Day",
    },
    FixedPanel {
        candle: "3minute",
        title: "3 min",
    },
    FixedPanel {
        candle: "5minute",
        title: "5 min",
    },
    FixedPanel {
        candle: "15minute",
        title: "15 min",
    },
];

/// One transposed summary cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "Metric")]
    pub metric: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// One displayed signal row, grouping columns dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalTableRow {
    pub day: String,
    #[serde(rename = "buyClose")]
    pub buy_close: Option<f64>,
    #[serde(rename = "sellOpen")]
    pub sell_open: Option<f64>,
}

impl SignalTableRow {
    pub fn is_total(&self) -> bool {
        self.day == TOTAL_LABEL
    }
}

/// Transpose a stock's summary row into metric/value pairs.
///
/// Without a stock every metric label is paired with [`PLACEHOLDER`]. A stock
/// absent from the summary table yields no rows.
pub fn summary_table(summary: &SummaryTable, stock: Option<&StockId>) -> Vec<MetricRow> {
    let labels = summary.metric_labels();

    let Some(stock) = stock else {
        return labels
            .iter()
            .map(|metric| MetricRow {
                metric: metric.clone(),
                value: String::from(PLACEHOLDER),
            })
            .collect();
    };

    summary
        .row(stock)
        .map(|cells| {
            labels
                .iter()
                .zip(cells)
                .map(|(metric, value)| MetricRow {
                    metric: metric.clone(),
                    value: value.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Rows of the `100day` window for one candle size, plus the Total row.
pub fn fixed_window_table(
    signals: &SignalsTable,
    stock: &StockId,
    candle: &CandleSize,
) -> Vec<SignalTableRow> {
    let window = Window::fixed();
    with_total(signals.select(stock, &window, candle))
}

/// Rows of a freely chosen window at `day` candle size, plus the Total row.
///
/// An unset window matches nothing and leaves only a zero Total row.
pub fn window_table(
    signals: &SignalsTable,
    stock: &StockId,
    window: Option<&Window>,
) -> Vec<SignalTableRow> {
    let Some(window) = window else {
        return with_total(std::iter::empty());
    };
    let candle = CandleSize::day();
    with_total(signals.select(stock, window, &candle))
}

fn with_total<'a>(rows: impl Iterator<Item = &'a SignalRow>) -> Vec<SignalTableRow> {
    let mut table: Vec<SignalTableRow> = rows
        .map(|row| SignalTableRow {
            day: row.day.clone(),
            buy_close: row.buy_close,
            sell_open: row.sell_open,
        })
        .collect();

    let buy_total: f64 = table.iter().filter_map(|row| row.buy_close).sum();
    let sell_total: f64 = table.iter().filter_map(|row| row.sell_open).sum();
    table.push(SignalTableRow {
        day: String::from(TOTAL_LABEL),
        buy_close: Some(round2(buy_total)),
        sell_open: Some(round2(sell_total)),
    });

    table
}

/// Round to two decimals, ties to even (`0.125` → `0.12`, `0.375` → `0.38`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
