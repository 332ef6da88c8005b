//! Command-line flags of the `ferrodash` server.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--bind` | `127.0.0.1` | Listen address |
//! | `--port` | `8008` | Listen port |
//! | `--series` | upstream `csv_23.csv` | Price/indicator series CSV |
//! | `--summary` | upstream `csv1.csv` | Per-stock summary CSV |
//! | `--signals` | upstream `csv4.csv` | Buy/sell signal CSV |
//! | `--timeout-ms` | `10000` | Dataset fetch timeout |
//! | `--strict` | `false` | Refuse to start on stock-key mismatches |
//!
//! Dataset locations starting with `http://` or `https://` are fetched,
//! anything else is read from disk.

use clap::Parser;

/// Stock Analyzer dashboard server
///
/// Loads the series, summary and signal tables once at startup and serves
/// an interactive page with candlestick and line charts plus signal tables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ferrodash",
    author,
    version,
    about = "Stock Analyzer dashboard server"
)]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8008)]
    pub port: u16,

    /// Series dataset (Date, stock, close, sma20, upper, lower).
    #[arg(long)]
    pub series: Option<String>,

    /// Summary dataset (one row per stock).
    #[arg(long)]
    pub summary: Option<String>,

    /// Signals dataset (stock, window, candle, day, buyClose, sellOpen).
    #[arg(long)]
    pub signals: Option<String>,

    /// Fetch timeout for URL datasets in milliseconds.
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Treat stock keys missing from any dataset as a startup failure (exit code 5).
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
