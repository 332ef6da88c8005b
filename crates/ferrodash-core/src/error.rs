use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for identifiers and envelope metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("stock identifier cannot be empty")]
    EmptyStock,
    #[error("stock identifier contains control character at index {index}")]
    StockControlChar { index: usize },

    #[error("window name cannot be empty")]
    EmptyWindow,
    #[error("candle size cannot be empty")]
    EmptyCandle,

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
}

/// Startup failures while fetching or parsing the three datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("fetch of {dataset} dataset from '{location}' failed: {source}")]
    Fetch {
        dataset: &'static str,
        location: String,
        #[source]
        source: HttpError,
    },

    #[error("fetch of {dataset} dataset from '{location}' returned HTTP {status}")]
    Status {
        dataset: &'static str,
        location: String,
        status: u16,
    },

    #[error("read of {dataset} dataset from '{location}' failed: {source}")]
    Read {
        dataset: &'static str,
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{dataset} dataset is not valid CSV: {source}")]
    Csv {
        dataset: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{dataset} dataset is missing required column '{column}'")]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
    },

    #[error("{dataset} dataset row {row}: column '{column}' has invalid value '{value}'")]
    InvalidValue {
        dataset: &'static str,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{dataset} dataset row {row}: {source}")]
    InvalidKey {
        dataset: &'static str,
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("stock identifiers disagree across datasets: {summary}")]
    Integrity { summary: String },
}
