//! # Ferrodash Core
//!
//! Data layer of the ferrodash stock-analysis dashboard.
//!
//! ## Overview
//!
//! Three precomputed CSV datasets are loaded once at startup and never
//! mutated afterwards. Every user interaction re-runs a pure binding over
//! those tables:
//!
//! - **Chart builders** turn the series table into Plotly figures
//! - **Table reshapers** transpose the summary row and aggregate signals
//!   into tables ending in a `Total` row
//! - **Dropdown exclusion** keeps the four comparison windows pairwise distinct
//! - **Theme** selects font colour, heading styles and stylesheet
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bindings`] | Input→output binding graph of the page |
//! | [`charts`] | Candlestick and line figure builders |
//! | [`dataset`] | CSV tables, loader and integrity report |
//! | [`domain`] | Identifier newtypes and row records |
//! | [`dropdown`] | Mutually exclusive window options |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`layout`] | Page description served to the browser |
//! | [`tables`] | Summary and signal table reshapers |
//! | [`theme`] | Light/dark theme state |
//! | [`view`] | Server-side binding evaluation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ferrodash_core::{update_graph, DatasetLoader, DatasetSources, GraphInputs, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new(Arc::new(ReqwestHttpClient::new()));
//!     let datasets = loader.load(&DatasetSources::default()).await?;
//!
//!     let view = update_graph(&datasets, &GraphInputs::default()).output;
//!     println!("{}", serde_json::to_string(&view)?);
//!     Ok(())
//! }
//! ```

pub mod bindings;
pub mod charts;
pub mod dataset;
pub mod domain;
pub mod dropdown;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod layout;
pub mod tables;
pub mod theme;
pub mod view;

pub use bindings::{bindings_for_input, Binding, Runtime, Slot, BINDINGS};
pub use charts::{candle_chart, placeholder_chart, price_chart, Figure, Trace};
pub use dataset::{
    DatasetLoader, DatasetSource, DatasetSources, Datasets, IntegrityReport, SeriesTable,
    SignalsTable, SummaryTable,
};
pub use domain::{CandleSize, SeriesPoint, SignalRow, StockId, Window};
pub use dropdown::{window_options, DropdownOption, WINDOW_FILTERS};
pub use envelope::{Envelope, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{DatasetError, ValidationError};
pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use layout::DashboardLayout;
pub use tables::{
    fixed_window_table, summary_table, window_table, MetricRow, SignalTableRow, PLACEHOLDER,
    TOTAL_LABEL,
};
pub use theme::{TextStyle, Theme, ThemeStyles};
pub use view::{
    change_color, update_dropdown, update_graph, DashboardView, GraphInputs, Rendered,
    ThemeInput, WindowOptions, WindowSelections,
};
