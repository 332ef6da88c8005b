use std::collections::HashMap;

use crate::dataset::csv_util::{column, display_row, headers, reader};
use crate::{DatasetError, StockId};

const DATASET: &str = "summary";

/// One row of raw metric cells per stock; the header doubles as the metric label set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryTable {
    columns: Vec<String>,
    stocks: Vec<StockId>,
    rows: HashMap<StockId, Vec<String>>,
}

impl SummaryTable {
    /// Parse the summary CSV. Only the `stock` column is required.
    ///
    /// A stock listed twice keeps its first row.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut reader = reader(text);
        let headers = headers(&mut reader, DATASET)?;
        let stock_col = column(&headers, DATASET, "stock")?;

        let mut table = Self {
            columns: headers.iter().map(str::to_owned).collect(),
            ..Self::default()
        };

        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|source| DatasetError::Csv {
                dataset: DATASET,
                source,
            })?;
            let stock = StockId::parse(record.get(stock_col).unwrap_or_default())
                .map_err(|source| DatasetError::InvalidKey {
                    dataset: DATASET,
                    row: display_row(index),
                    source,
                })?;

            if table.rows.contains_key(&stock) {
                tracing::warn!(stock = %stock, "duplicate summary row ignored");
                continue;
            }
            table.stocks.push(stock.clone());
            table
                .rows
                .insert(stock, record.iter().map(str::to_owned).collect());
        }

        Ok(table)
    }

    /// Metric labels in header order, `stock` included.
    pub fn metric_labels(&self) -> &[String] {
        &self.columns
    }

    /// Raw cells of one stock, aligned with [`Self::metric_labels`].
    pub fn row(&self, stock: &StockId) -> Option<&[String]> {
        self.rows.get(stock).map(Vec::as_slice)
    }

    pub fn stocks(&self) -> &[StockId] {
        &self.stocks
    }

    pub fn contains(&self, stock: &StockId) -> bool {
        self.rows.contains_key(stock)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
