//! Server-side bindings: inputs in, outputs plus warnings out.

use serde::{Deserialize, Serialize};

use crate::charts::{candle_chart, placeholder_chart, price_chart, Figure};
use crate::dataset::Datasets;
use crate::dropdown::{stale_selections, window_options, DropdownOption, WINDOW_FILTERS};
use crate::tables::{
    fixed_window_table, summary_table, window_table, MetricRow, SignalTableRow, FIXED_PANELS,
};
use crate::theme::ThemeStyles;
use crate::{StockId, Theme, Window};

/// Result of one binding evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered<T> {
    pub output: T,
    pub warnings: Vec<String>,
}

impl<T> Rendered<T> {
    fn new(output: T, warnings: Vec<String>) -> Self {
        Self { output, warnings }
    }
}

/// Inputs of `update-graph`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphInputs {
    pub stock: Option<StockId>,
    pub windows: [Option<Window>; WINDOW_FILTERS],
    pub theme: Theme,
}

/// Outputs of `update-graph`, one field per output slot group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub price_chart1: Figure,
    pub price_chart2: Figure,
    pub row1_table1: Vec<MetricRow>,
    pub row2_tables: [Vec<SignalTableRow>; 4],
    pub row3_tables: [Vec<SignalTableRow>; WINDOW_FILTERS],
}

/// Inputs of `update-dropdown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSelections {
    pub windows: [Option<Window>; WINDOW_FILTERS],
}

/// Outputs of `update-dropdown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowOptions {
    pub options: [Vec<DropdownOption>; WINDOW_FILTERS],
}

/// Inputs of `change-color`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeInput {
    pub theme: Theme,
}

/// Recompute both charts, the summary and all eight signal tables.
pub fn update_graph(datasets: &Datasets, inputs: &GraphInputs) -> Rendered<DashboardView> {
    let Some(stock) = inputs.stock.as_ref() else {
        tracing::debug!("update-graph without a stock selection");
        return Rendered::new(
            DashboardView {
                price_chart1: placeholder_chart(),
                price_chart2: placeholder_chart(),
                row1_table1: summary_table(&datasets.summary, None),
                row2_tables: Default::default(),
                row3_tables: Default::default(),
            },
            Vec::new(),
        );
    };

    let mut warnings = Vec::new();
    if !datasets.series.contains(stock) {
        warnings.push(format!("unknown stock '{stock}' has no series data"));
    }
    warnings.extend(stale_window_warnings(datasets, &inputs.windows));

    let font_color = inputs.theme.font_color();
    let signals = &datasets.signals;
    let view = DashboardView {
        price_chart1: candle_chart(&datasets.series, stock, font_color),
        price_chart2: price_chart(&datasets.series, stock, font_color),
        row1_table1: summary_table(&datasets.summary, Some(stock)),
        row2_tables: FIXED_PANELS
            .map(|panel| fixed_window_table(signals, stock, &panel.candle_size())),
        row3_tables: std::array::from_fn(|index| {
            window_table(signals, stock, inputs.windows[index].as_ref())
        }),
    };

    tracing::debug!(stock = %stock, theme = ?inputs.theme, "update-graph rendered");
    Rendered::new(view, warnings)
}

/// Prune each window dropdown by the other three selections.
pub fn update_dropdown(datasets: &Datasets, selections: &WindowSelections) -> Rendered<WindowOptions> {
    let universe = datasets.signals.window_universe();
    let options: [Vec<DropdownOption>; WINDOW_FILTERS] = window_options(universe, &selections.windows)
        .map(|windows| windows.iter().map(DropdownOption::from).collect());

    Rendered::new(
        WindowOptions { options },
        stale_window_warnings(datasets, &selections.windows),
    )
}

/// Heading styles and stylesheet for a theme.
pub fn change_color(input: &ThemeInput) -> Rendered<ThemeStyles> {
    Rendered::new(input.theme.styles(), Vec::new())
}

fn stale_window_warnings(
    datasets: &Datasets,
    windows: &[Option<Window>; WINDOW_FILTERS],
) -> Vec<String> {
    stale_selections(datasets.signals.window_universe(), windows)
        .into_iter()
        .map(|window| {
            tracing::warn!(window = %window, "stale window selection treated as unset");
            format!("window '{window}' is not offered and was treated as unset")
        })
        .collect()
}
