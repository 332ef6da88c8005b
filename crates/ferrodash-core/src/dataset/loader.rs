use std::path::PathBuf;
use std::sync::Arc;

use crate::dataset::{Datasets, SeriesTable, SignalsTable, SummaryTable};
use crate::http_client::{HttpClient, HttpRequest};
use crate::DatasetError;

const UPSTREAM_BASE: &str =
    "https://raw.githubusercontent.com/AtharvaKatre/Dash-StockAnalyzer/main/assets/datasets";

/// Where a dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    Path(PathBuf),
}

impl DatasetSource {
    /// `http://` and `https://` locations are URLs, anything else a filesystem path.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_owned())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    pub fn location(&self) -> String {
        match self {
            Self::Url(url) => url.clone(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

/// Locations of the three datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSources {
    pub series: DatasetSource,
    pub summary: DatasetSource,
    pub signals: DatasetSource,
}

impl Default for DatasetSources {
    fn default() -> Self {
        Self {
            series: DatasetSource::Url(format!("{UPSTREAM_BASE}/csv_23.csv")),
            summary: DatasetSource::Url(format!("{UPSTREAM_BASE}/csv1.csv")),
            signals: DatasetSource::Url(format!("{UPSTREAM_BASE}/csv4.csv")),
        }
    }
}

/// Fetches and parses the datasets once at startup. Failures are not retried.
#[derive(Clone)]
pub struct DatasetLoader {
    client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl DatasetLoader {
    pub fn new(client: Arc<dyn HttpClient>) -> Self {
        Self {
            client,
            timeout_ms: 10_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub async fn load(&self, sources: &DatasetSources) -> Result<Datasets, DatasetError> {
        let (series, summary, signals) = tokio::try_join!(
            self.fetch("series", &sources.series),
            self.fetch("summary", &sources.summary),
            self.fetch("signals", &sources.signals),
        )?;

        let datasets = Datasets::new(
            SeriesTable::from_csv(&series)?,
            SummaryTable::from_csv(&summary)?,
            SignalsTable::from_csv(&signals)?,
        );

        tracing::info!(
            series_rows = datasets.series.len(),
            stocks = datasets.series.stocks().len(),
            summary_rows = datasets.summary.len(),
            signal_rows = datasets.signals.len(),
            windows = datasets.signals.window_universe().len(),
            "datasets loaded"
        );

        Ok(datasets)
    }

    async fn fetch(
        &self,
        dataset: &'static str,
        source: &DatasetSource,
    ) -> Result<String, DatasetError> {
        tracing::debug!(dataset, location = %source.location(), "fetching dataset");

        match source {
            DatasetSource::Url(url) => {
                let request = HttpRequest::get(url.as_str())
                    .with_header("accept", "text/csv")
                    .with_timeout_ms(self.timeout_ms);
                let response =
                    self.client
                        .execute(request)
                        .await
                        .map_err(|source| DatasetError::Fetch {
                            dataset,
                            location: url.clone(),
                            source,
                        })?;

                if !response.is_success() {
                    return Err(DatasetError::Status {
                        dataset,
                        location: url.clone(),
                        status: response.status,
                    });
                }
                Ok(response.body)
            }
            DatasetSource::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| DatasetError::Read {
                        dataset,
                        location: path.display().to_string(),
                        source,
                    })
            }
        }
    }
}
