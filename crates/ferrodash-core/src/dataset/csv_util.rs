use csv::{ReaderBuilder, StringRecord};

use crate::DatasetError;

pub(crate) fn reader(text: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(text.as_bytes())
}

pub(crate) fn headers(
    reader: &mut csv::Reader<&[u8]>,
    dataset: &'static str,
) -> Result<StringRecord, DatasetError> {
    reader
        .headers()
        .cloned()
        .map_err(|source| DatasetError::Csv { dataset, source })
}

pub(crate) fn column(
    headers: &StringRecord,
    dataset: &'static str,
    name: &'static str,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or(DatasetError::MissingColumn {
            dataset,
            column: name,
        })
}

/// 1-based data row number as a spreadsheet shows it (header is row 1).
pub(crate) const fn display_row(index: usize) -> usize {
    index + 2
}

pub(crate) fn required_f64(
    record: &StringRecord,
    index: usize,
    dataset: &'static str,
    row: usize,
    column: &'static str,
) -> Result<f64, DatasetError> {
    let raw = record.get(index).unwrap_or_default();
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| DatasetError::InvalidValue {
            dataset,
            row,
            column,
            value: raw.to_owned(),
        })
}

/// Empty and NaN cells are missing values; anything else must parse.
pub(crate) fn optional_f64(
    record: &StringRecord,
    index: usize,
    dataset: &'static str,
    row: usize,
    column: &'static str,
) -> Result<Option<f64>, DatasetError> {
    let raw = record.get(index).unwrap_or_default();
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    required_f64(record, index, dataset, row, column).map(Some)
}
