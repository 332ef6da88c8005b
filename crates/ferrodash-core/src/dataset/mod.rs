//! Startup datasets: parsing, loading and cross-table consistency.

mod csv_util;
mod loader;
mod series;
mod signals;
mod summary;

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub use loader::{DatasetLoader, DatasetSource, DatasetSources};
pub use series::SeriesTable;
pub use signals::SignalsTable;
pub use summary::SummaryTable;

use crate::{DatasetError, StockId};

/// The three immutable tables the dashboard reads from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Datasets {
    pub series: SeriesTable,
    pub summary: SummaryTable,
    pub signals: SignalsTable,
}

impl Datasets {
    pub fn new(series: SeriesTable, summary: SummaryTable, signals: SignalsTable) -> Self {
        Self {
            series,
            summary,
            signals,
        }
    }

    /// Compare stock keys across the tables, using the series table as reference.
    pub fn integrity_report(&self) -> IntegrityReport {
        let series = self.series.stocks();

        IntegrityReport {
            missing_from_summary: series
                .iter()
                .filter(|stock| !self.summary.contains(stock))
                .cloned()
                .collect(),
            missing_from_signals: series
                .iter()
                .filter(|stock| !self.signals.contains(stock))
                .cloned()
                .collect(),
            summary_without_series: self
                .summary
                .stocks()
                .iter()
                .filter(|stock| !self.series.contains(stock))
                .cloned()
                .collect(),
            signals_without_series: self
                .signals
                .stocks()
                .iter()
                .filter(|stock| !self.series.contains(stock))
                .cloned()
                .collect(),
        }
    }
}

/// Stock keys that do not line up across the three tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub missing_from_summary: Vec<StockId>,
    pub missing_from_signals: Vec<StockId>,
    pub summary_without_series: Vec<StockId>,
    pub signals_without_series: Vec<StockId>,
}

impl IntegrityReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_from_summary.is_empty()
            && self.missing_from_signals.is_empty()
            && self.summary_without_series.is_empty()
            && self.signals_without_series.is_empty()
    }

    /// Turn any mismatch into a fatal [`DatasetError::Integrity`].
    pub fn ensure_consistent(&self) -> Result<(), DatasetError> {
        if self.is_consistent() {
            return Ok(());
        }
        Err(DatasetError::Integrity {
            summary: self.to_string(),
        })
    }

    /// One message per non-empty mismatch group.
    pub fn messages(&self) -> Vec<String> {
        [
            ("in series but not in summary", &self.missing_from_summary),
            ("in series but not in signals", &self.missing_from_signals),
            ("in summary but not in series", &self.summary_without_series),
            ("in signals but not in series", &self.signals_without_series),
        ]
        .into_iter()
        .filter(|(_, stocks)| !stocks.is_empty())
        .map(|(label, stocks)| {
            let names: Vec<&str> = stocks.iter().map(StockId::as_str).collect();
            format!("{label}: {}", names.join(", "))
        })
        .collect()
    }
}

impl Display for IntegrityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_consistent() {
            return f.write_str("consistent");
        }
        f.write_str(&self.messages().join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datasets() -> Datasets {
        Datasets::new(
            SeriesTable::from_csv(
                "Date,stock,close,sma20,upper,lower\n2021-01-01,ACC,1,1,1,1\n2021-01-01,TCS,1,1,1,1\n",
            )
            .expect("valid"),
            SummaryTable::from_csv("stock,beta\nACC,1\nINFY,2\n").expect("valid"),
            SignalsTable::from_csv(
                "stock,window,candle,day,buyClose,sellOpen\nACC,100day,day,Mon,1,1\nTCS,100day,day,Mon,1,1\n",
            )
            .expect("valid"),
        )
    }

    #[test]
    fn reports_mismatches_in_both_directions() {
        let report = datasets().integrity_report();

        assert!(!report.is_consistent());
        assert_eq!(report.missing_from_summary, vec![StockId::parse("TCS").expect("valid")]);
        assert_eq!(report.summary_without_series, vec![StockId::parse("INFY").expect("valid")]);
        assert!(report.missing_from_signals.is_empty());
        assert_eq!(
            report.to_string(),
            "in series but not in summary: TCS; in summary but not in series: INFY"
        );
        assert!(matches!(
            report.ensure_consistent(),
            Err(DatasetError::Integrity { .. })
        ));
    }

    #[test]
    fn empty_tables_are_consistent() {
        let report = Datasets::default().integrity_report();
        assert!(report.is_consistent());
        assert_eq!(report.to_string(), "consistent");
    }
}
