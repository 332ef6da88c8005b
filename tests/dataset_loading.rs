//! Behavior-driven tests for startup dataset loading
//!
//! These tests verify how the loader reads the three CSV tables from URLs
//! and from disk, and how it reports broken or inconsistent inputs.

use std::io::Write;
use std::sync::Arc;

use ferrodash_core::{DatasetError, DatasetLoader, DatasetSource, DatasetSources, FixtureHttpClient};
use ferrodash_tests::{
    fixture_client, fixture_loader, fixture_path, fixture_sources, fixture_text, stock,
    SIGNALS_URL, SUMMARY_URL,
};
use tempfile::NamedTempFile;

// =============================================================================
// Loading: Happy Paths
// =============================================================================

#[tokio::test]
async fn when_all_urls_answer_loader_builds_every_table() {
    // Given: A loader whose transport serves the three fixture CSVs
    let loader = fixture_loader();

    // When: The datasets are loaded
    let datasets = loader
        .load(&fixture_sources())
        .await
        .expect("fixtures load");

    // Then: Every table is populated and stocks keep first-appearance order
    assert_eq!(datasets.series.len(), 5);
    let stocks: Vec<&str> = datasets.series.stocks().iter().map(|s| s.as_str()).collect();
    assert_eq!(stocks, vec!["ACC", "TCS"]);
    assert_eq!(datasets.summary.len(), 2);
    assert_eq!(datasets.signals.len(), 11);

    let windows: Vec<&str> = datasets
        .signals
        .window_universe()
        .iter()
        .map(|w| w.as_str())
        .collect();
    assert_eq!(windows, vec!["100day", "3minute", "15minute", "1week"]);
}

#[tokio::test]
async fn when_sources_are_paths_loader_reads_from_disk() {
    // Given: The fixtures referenced by filesystem path
    let sources = DatasetSources {
        series: DatasetSource::Path(fixture_path("series.csv")),
        summary: DatasetSource::Path(fixture_path("summary.csv")),
        signals: DatasetSource::Path(fixture_path("signals.csv")),
    };
    let loader = DatasetLoader::new(Arc::new(FixtureHttpClient::new()));

    // When: The datasets are loaded
    let datasets = loader.load(&sources).await.expect("paths load");

    // Then: The result matches the URL-loaded tables
    let from_urls = fixture_loader()
        .load(&fixture_sources())
        .await
        .expect("fixtures load");
    assert_eq!(datasets, from_urls);
}

#[tokio::test]
async fn when_mixing_urls_and_temp_files_loader_accepts_both() {
    // Given: A summary table written to a temporary file
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "stock,sector\nACC,Cement\nTCS,IT\n").expect("write");

    let sources = DatasetSources {
        summary: DatasetSource::parse(&file.path().display().to_string()),
        ..fixture_sources()
    };

    // When: The datasets are loaded
    let datasets = fixture_loader().load(&sources).await.expect("loads");

    // Then: The summary columns come from the temp file
    assert_eq!(datasets.summary.metric_labels(), ["stock", "sector"]);
    assert_eq!(
        datasets.summary.row(&stock("TCS")).expect("row"),
        ["TCS", "IT"]
    );
}

#[tokio::test]
async fn when_fixtures_agree_integrity_report_is_consistent() {
    // Given: The fixture tables
    let datasets = fixture_loader()
        .load(&fixture_sources())
        .await
        .expect("fixtures load");

    // When: Stock keys are compared
    let report = datasets.integrity_report();

    // Then: No mismatch is reported
    assert!(report.is_consistent(), "{report}");
    assert!(report.ensure_consistent().is_ok());
}

// =============================================================================
// Loading: Failures Are Fatal
// =============================================================================

#[tokio::test]
async fn when_a_url_returns_404_load_fails_with_status() {
    // Given: A transport that does not know the signals URL
    let client = FixtureHttpClient::new()
        .with_body(ferrodash_tests::SERIES_URL, fixture_text("series.csv"))
        .with_body(SUMMARY_URL, fixture_text("summary.csv"));
    let loader = DatasetLoader::new(Arc::new(client));

    // When: The datasets are loaded
    let error = loader
        .load(&fixture_sources())
        .await
        .expect_err("missing signals must fail");

    // Then: The error names the dataset, location and status
    match error {
        DatasetError::Status {
            dataset,
            location,
            status,
        } => {
            assert_eq!(dataset, "signals");
            assert_eq!(location, SIGNALS_URL);
            assert_eq!(status, 404);
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[tokio::test]
async fn when_a_path_is_missing_load_fails_with_read_error() {
    // Given: A series path that does not exist
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = DatasetSources {
        series: DatasetSource::Path(dir.path().join("absent.csv")),
        ..fixture_sources()
    };

    // When: The datasets are loaded
    let error = fixture_loader()
        .load(&sources)
        .await
        .expect_err("absent file must fail");

    // Then: A read error for the series dataset is returned
    assert!(matches!(error, DatasetError::Read { dataset: "series", .. }));
}

#[tokio::test]
async fn when_a_required_column_is_missing_load_fails() {
    // Given: A series table without the sma20 column
    let client = fixture_client().with_body(
        ferrodash_tests::SERIES_URL,
        "Date,stock,close,upper,lower\n2021-03-01,ACC,1,2,0\n",
    );
    let loader = DatasetLoader::new(Arc::new(client));

    // When: The datasets are loaded
    let error = loader
        .load(&fixture_sources())
        .await
        .expect_err("missing column must fail");

    // Then: The missing column is named
    assert!(matches!(
        error,
        DatasetError::MissingColumn {
            dataset: "series",
            column: "sma20"
        }
    ));
}

#[tokio::test]
async fn when_rolling_indicators_start_blank_load_keeps_them_as_gaps() {
    // Given: A series whose first row has no sma20 or bands yet
    let client = fixture_client().with_body(
        ferrodash_tests::SERIES_URL,
        "Date,stock,close,sma20,upper,lower\n\
         2021-03-01,ACC,1800.5,,,\n\
         2021-03-02,ACC,1812.0,NaN,NaN,NaN\n\
         2021-03-03,ACC,1798.25,1794.1,1855.9,1732.3\n",
    );
    let loader = DatasetLoader::new(Arc::new(client));

    // When: The datasets are loaded
    let datasets = loader
        .load(&fixture_sources())
        .await
        .expect("blank indicators are not a parse error");

    // Then: The missing cells are kept as gaps and the close is intact
    let points = datasets.series.points(&stock("ACC"));
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].close, Some(1800.5));
    assert_eq!(points[0].sma20, None);
    assert_eq!(points[1].upper, None);
    assert_eq!(points[2].lower, Some(1732.3));
}

#[tokio::test]
async fn when_a_price_is_not_numeric_load_reports_row_and_column() {
    // Given: A series row with a non-numeric close
    let client = fixture_client().with_body(
        ferrodash_tests::SERIES_URL,
        "Date,stock,close,sma20,upper,lower\n2021-03-01,ACC,1,1,1,1\n2021-03-02,ACC,n/a,1,1,1\n",
    );
    let loader = DatasetLoader::new(Arc::new(client));

    // When: The datasets are loaded
    let error = loader
        .load(&fixture_sources())
        .await
        .expect_err("invalid value must fail");

    // Then: The error points at the third line of the file
    match error {
        DatasetError::InvalidValue {
            row, column, value, ..
        } => {
            assert_eq!(row, 3);
            assert_eq!(column, "close");
            assert_eq!(value, "n/a");
        }
        other => panic!("expected invalid value, got {other}"),
    }
}

// =============================================================================
// Integrity: Mismatched Stock Keys
// =============================================================================

#[tokio::test]
async fn when_summary_lacks_a_stock_integrity_report_names_it() {
    // Given: A summary table that only knows ACC
    let client = fixture_client().with_body(SUMMARY_URL, "stock,sector\nACC,Cement\nINFY,IT\n");
    let datasets = DatasetLoader::new(Arc::new(client))
        .load(&fixture_sources())
        .await
        .expect("mismatch is not a parse error");

    // When: Stock keys are compared
    let report = datasets.integrity_report();

    // Then: Both directions of the mismatch are reported
    assert!(!report.is_consistent());
    assert_eq!(report.missing_from_summary, vec![stock("TCS")]);
    assert_eq!(report.summary_without_series, vec![stock("INFY")]);
    assert!(report.missing_from_signals.is_empty());

    // And: Strict checking turns it into an integrity error
    let error = report.ensure_consistent().expect_err("strict check fails");
    assert!(matches!(error, DatasetError::Integrity { .. }));
    assert!(error.to_string().contains("TCS"));
}
