use serde::Serialize;

use crate::bindings::{Binding, BINDINGS};
use crate::dataset::Datasets;
use crate::dropdown::DropdownOption;
use crate::tables::{FixedPanel, FIXED_PANELS, SIGNAL_COLUMNS, SUMMARY_COLUMNS};
use crate::{StockId, Theme};

pub const APP_TITLE: &str = "Stock Analyzer";
pub const ROW2_TITLE: &str = "100 Day Window";
pub const ROW3_TITLE: &str = "Compare Window";

/// Stock preselected on page load when the series table has it.
pub const DEFAULT_STOCK: &str = "ACC";

/// Bootswatch stylesheet per theme, swapped by the page without a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stylesheets {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Static description of the page: widget options, headings and the binding graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: &'static str,
    pub stock_options: Vec<DropdownOption>,
    pub default_stock: Option<StockId>,
    pub window_options: Vec<DropdownOption>,
    pub default_theme: Theme,
    pub stylesheets: Stylesheets,
    pub row2_title: &'static str,
    pub row3_title: &'static str,
    pub fixed_panels: &'static [FixedPanel],
    pub summary_columns: &'static [&'static str],
    pub signal_columns: &'static [&'static str],
    pub bindings: &'static [Binding],
}

impl DashboardLayout {
    pub fn from_datasets(datasets: &Datasets) -> Self {
        let stocks = datasets.series.stocks();
        let default_stock = stocks
            .iter()
            .find(|stock| stock.as_str() == DEFAULT_STOCK)
            .or_else(|| stocks.first())
            .cloned();

        Self {
            title: APP_TITLE,
            stock_options: stocks
                .iter()
                .map(|stock| DropdownOption {
                    label: stock.to_string(),
                    value: stock.to_string(),
                })
                .collect(),
            default_stock,
            window_options: datasets
                .signals
                .window_universe()
                .iter()
                .map(DropdownOption::from)
                .collect(),
            default_theme: Theme::default(),
            stylesheets: Stylesheets {
                light: Theme::Light.stylesheet(),
                dark: Theme::Dark.stylesheet(),
            },
            row2_title: ROW2_TITLE,
            row3_title: ROW3_TITLE,
            fixed_panels: &FIXED_PANELS,
            summary_columns: &SUMMARY_COLUMNS,
            signal_columns: &SIGNAL_COLUMNS,
            bindings: &BINDINGS,
        }
    }
}
