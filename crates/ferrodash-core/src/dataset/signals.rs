use crate::dataset::csv_util::{column, display_row, headers, optional_f64, reader};
use crate::{CandleSize, DatasetError, SignalRow, StockId, Window};

const DATASET: &str = "signals";

/// Windowed buy/sell signal rows plus the window option universe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalsTable {
    rows: Vec<SignalRow>,
    windows: Vec<Window>,
    stocks: Vec<StockId>,
}

impl SignalsTable {
    /// Parse the signals CSV (`stock`, `window`, `candle`, `day`, `buyClose`, `sellOpen`).
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut reader = reader(text);
        let headers = headers(&mut reader, DATASET)?;
        let stock_col = column(&headers, DATASET, "stock")?;
        let window_col = column(&headers, DATASET, "window")?;
        let candle_col = column(&headers, DATASET, "candle")?;
        let day_col = column(&headers, DATASET, "day")?;
        let buy_col = column(&headers, DATASET, "buyClose")?;
        let sell_col = column(&headers, DATASET, "sellOpen")?;

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|source| DatasetError::Csv {
                dataset: DATASET,
                source,
            })?;
            let row = display_row(index);
            let invalid_key = |source| DatasetError::InvalidKey {
                dataset: DATASET,
                row,
                source,
            };

            rows.push(SignalRow {
                stock: StockId::parse(record.get(stock_col).unwrap_or_default())
                    .map_err(invalid_key)?,
                window: Window::parse(record.get(window_col).unwrap_or_default())
                    .map_err(invalid_key)?,
                candle: CandleSize::parse(record.get(candle_col).unwrap_or_default())
                    .map_err(invalid_key)?,
                day: record.get(day_col).unwrap_or_default().to_owned(),
                buy_close: optional_f64(&record, buy_col, DATASET, row, "buyClose")?,
                sell_open: optional_f64(&record, sell_col, DATASET, row, "sellOpen")?,
            });
        }

        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<SignalRow>) -> Self {
        let mut windows: Vec<Window> = Vec::new();
        let mut stocks: Vec<StockId> = Vec::new();
        for row in &rows {
            if !windows.contains(&row.window) {
                windows.push(row.window.clone());
            }
            if !stocks.contains(&row.stock) {
                stocks.push(row.stock.clone());
            }
        }

        Self {
            rows,
            windows,
            stocks,
        }
    }

    /// Distinct windows in order of first appearance.
    pub fn window_universe(&self) -> &[Window] {
        &self.windows
    }

    pub fn stocks(&self) -> &[StockId] {
        &self.stocks
    }

    pub fn contains(&self, stock: &StockId) -> bool {
        self.stocks.contains(stock)
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    /// Rows of one (stock, window, candle) group in file order.
    pub fn select<'a>(
        &'a self,
        stock: &'a StockId,
        window: &'a Window,
        candle: &'a CandleSize,
    ) -> impl Iterator<Item = &'a SignalRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| row.matches(stock, window, candle))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
