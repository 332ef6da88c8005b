use std::collections::HashMap;

use crate::dataset::csv_util::{column, display_row, headers, optional_f64, reader};
use crate::{DatasetError, SeriesPoint, StockId};

const DATASET: &str = "series";

/// Close/SMA20/band observations grouped by stock, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTable {
    stocks: Vec<StockId>,
    points: HashMap<StockId, Vec<SeriesPoint>>,
}

impl SeriesTable {
    /// Parse the series CSV (`Date`, `stock`, `close`, `sma20`, `upper`, `lower`).
    ///
    /// Blank and `NaN` price cells are kept as gaps; rolling indicators are
    /// undefined for the first rows of every stock.
    pub fn from_csv(text: &str) -> Result<Self, DatasetError> {
        let mut reader = reader(text);
        let headers = headers(&mut reader, DATASET)?;
        let date_col = column(&headers, DATASET, "Date")?;
        let stock_col = column(&headers, DATASET, "stock")?;
        let close_col = column(&headers, DATASET, "close")?;
        let sma20_col = column(&headers, DATASET, "sma20")?;
        let upper_col = column(&headers, DATASET, "upper")?;
        let lower_col = column(&headers, DATASET, "lower")?;

        let mut table = Self::default();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|source| DatasetError::Csv {
                dataset: DATASET,
                source,
            })?;
            let row = display_row(index);

            let stock = StockId::parse(record.get(stock_col).unwrap_or_default())
                .map_err(|source| DatasetError::InvalidKey {
                    dataset: DATASET,
                    row,
                    source,
                })?;
            let raw_date = record.get(date_col).unwrap_or_default();
            let date = SeriesPoint::parse_date(raw_date).ok_or_else(|| {
                DatasetError::InvalidValue {
                    dataset: DATASET,
                    row,
                    column: "Date",
                    value: raw_date.to_owned(),
                }
            })?;

            let point = SeriesPoint {
                date,
                close: optional_f64(&record, close_col, DATASET, row, "close")?,
                sma20: optional_f64(&record, sma20_col, DATASET, row, "sma20")?,
                upper: optional_f64(&record, upper_col, DATASET, row, "upper")?,
                lower: optional_f64(&record, lower_col, DATASET, row, "lower")?,
            };
            table.push(stock, point);
        }

        Ok(table)
    }

    fn push(&mut self, stock: StockId, point: SeriesPoint) {
        if !self.points.contains_key(&stock) {
            self.stocks.push(stock.clone());
        }
        self.points.entry(stock).or_default().push(point);
    }

    /// Distinct stocks in order of first appearance.
    pub fn stocks(&self) -> &[StockId] {
        &self.stocks
    }

    pub fn contains(&self, stock: &StockId) -> bool {
        self.points.contains_key(stock)
    }

    /// Observations of one stock; empty for an unknown stock.
    pub fn points(&self, stock: &StockId) -> &[SeriesPoint] {
        self.points.get(stock).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.points.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Date,stock,close,sma20,upper,lower
2021-01-01,ACC,10,9,11,8
2021-01-01,TCS,20,19,21,18
2021-01-02,ACC,10.5,9.2,11.4,8.1
";

    #[test]
    fn groups_points_by_stock_in_file_order() {
        let table = SeriesTable::from_csv(CSV).expect("valid csv");
        let acc = StockId::parse("ACC").expect("valid");

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.stocks().iter().map(StockId::as_str).collect::<Vec<_>>(),
            vec!["ACC", "TCS"]
        );
        assert_eq!(table.points(&acc).len(), 2);
        assert_eq!(table.points(&acc)[1].close, Some(10.5));
    }

    #[test]
    fn unknown_stock_has_no_points() {
        let table = SeriesTable::from_csv(CSV).expect("valid csv");
        let missing = StockId::parse("INFY").expect("valid");
        assert!(table.points(&missing).is_empty());
    }

    #[test]
    fn reports_missing_column() {
        let err = SeriesTable::from_csv("Date,stock,close\n").expect_err("must fail");
        assert!(matches!(
            err,
            DatasetError::MissingColumn { column: "sma20", .. }
        ));
    }

    #[test]
    fn reports_bad_number_with_row() {
        let err = SeriesTable::from_csv("Date,stock,close,sma20,upper,lower\n2021-01-01,ACC,x,1,1,1\n")
            .expect_err("must fail");
        assert!(matches!(
            err,
            DatasetError::InvalidValue { row: 2, column: "close", .. }
        ));
    }

    #[test]
    fn leading_blank_indicators_become_gaps() {
        let table = SeriesTable::from_csv(
            "Date,stock,close,sma20,upper,lower\n\
             2021-01-01,ACC,10,,,\n\
             2021-01-02,ACC,11,NaN,12,9\n\
             2021-01-03,ACC,12,10.5,13,9.5\n",
        )
        .expect("blank indicator cells are accepted");
        let points = table.points(&StockId::parse("ACC").expect("valid"));

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].close, Some(10.0));
        assert_eq!(points[0].sma20, None);
        assert_eq!(points[0].upper, None);
        assert_eq!(points[0].lower, None);
        assert_eq!(points[1].sma20, None);
        assert_eq!(points[1].upper, Some(12.0));
        assert_eq!(points[2].sma20, Some(10.5));
    }
}
