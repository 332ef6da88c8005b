//! Plotly figure descriptions for the two price panels.
//!
//! Builders are pure: the same table, stock and font colour always give the
//! same figure. The browser hands the JSON straight to `Plotly.react`.

use serde::Serialize;

use crate::dataset::SeriesTable;
use crate::StockId;

const TRANSPARENT: &str = "rgba(0,0,0,0)";
const RANGESLIDER_BG: &str = "#CDCDCD";
const PRICE_AXIS_TITLE: &str = "Price (USD)";

/// Title shown on both panels when no stock is selected.
pub const NO_SELECTION_TITLE: &str = "No stock selected";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Candlestick {
        x: Vec<String>,
        open: Vec<Option<f64>>,
        high: Vec<Option<f64>>,
        low: Vec<Option<f64>>,
        close: Vec<Option<f64>>,
    },
    Scatter {
        x: Vec<String>,
        y: Vec<Option<f64>>,
        name: &'static str,
        marker: Marker,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rangeslider: Option<RangeSlider>,
    #[serde(flatten)]
    pub spikes: Option<Spikes>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeSlider {
    pub visible: bool,
    pub bgcolor: &'static str,
}

/// Cursor-following crosshair guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spikes {
    pub showspikes: bool,
    pub spikesnap: &'static str,
    pub spikemode: &'static str,
}

impl Spikes {
    const CURSOR_ACROSS: Self = Self {
        showspikes: true,
        spikesnap: "cursor",
        spikemode: "across",
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Font {
    pub color: &'static str,
}

/// Candlestick of one stock with sma20/upper/lower/close as open/high/low/close.
///
/// Missing cells are emitted as `null`, which plotly draws as a gap.
pub fn candle_chart(series: &SeriesTable, stock: &StockId, font_color: &'static str) -> Figure {
    let points = series.points(stock);

    let trace = Trace::Candlestick {
        x: points.iter().map(|point| point.axis_label()).collect(),
        open: points.iter().map(|point| point.sma20).collect(),
        high: points.iter().map(|point| point.upper).collect(),
        low: points.iter().map(|point| point.lower).collect(),
        close: points.iter().map(|point| point.close).collect(),
    };

    let mut layout = price_layout(stock, font_color);
    if let Some(xaxis) = layout.xaxis.as_mut() {
        xaxis.spikes = Some(Spikes::CURSOR_ACROSS);
    }
    if let Some(yaxis) = layout.yaxis.as_mut() {
        yaxis.spikes = Some(Spikes::CURSOR_ACROSS);
        yaxis.side = Some("right");
    }

    Figure {
        data: vec![trace],
        layout,
    }
}

/// Close, SMA20, Upper and Lower lines of one stock.
pub fn price_chart(series: &SeriesTable, stock: &StockId, font_color: &'static str) -> Figure {
    let points = series.points(stock);
    let x: Vec<String> = points.iter().map(|point| point.axis_label()).collect();

    let line = |name: &'static str, color: &'static str, y: Vec<Option<f64>>| Trace::Scatter {
        x: x.clone(),
        y,
        name,
        marker: Marker { color },
    };

    Figure {
        data: vec![
            line("Close", "skyblue", points.iter().map(|p| p.close).collect()),
            line("SMA20", "red", points.iter().map(|p| p.sma20).collect()),
            line("Upper", "green", points.iter().map(|p| p.upper).collect()),
            line("Lower", "gold", points.iter().map(|p| p.lower).collect()),
        ],
        layout: price_layout(stock, font_color),
    }
}

/// Empty figure shown when no stock is selected.
pub fn placeholder_chart() -> Figure {
    Figure {
        data: Vec::new(),
        layout: Layout {
            title: Title {
                text: String::from(NO_SELECTION_TITLE),
            },
            xaxis: None,
            yaxis: None,
            hovermode: None,
            paper_bgcolor: TRANSPARENT,
            plot_bgcolor: TRANSPARENT,
            margin: None,
            font: None,
        },
    }
}

fn price_layout(stock: &StockId, font_color: &'static str) -> Layout {
    Layout {
        title: Title {
            text: format!("<b>{stock}"),
        },
        xaxis: Some(Axis {
            rangeslider: Some(RangeSlider {
                visible: true,
                bgcolor: RANGESLIDER_BG,
            }),
            ..Axis::default()
        }),
        yaxis: Some(Axis {
            title: Some(Title {
                text: String::from(PRICE_AXIS_TITLE),
            }),
            ..Axis::default()
        }),
        hovermode: Some("x"),
        paper_bgcolor: TRANSPARENT,
        plot_bgcolor: TRANSPARENT,
        margin: Some(Margin { t: 40, b: 15 }),
        font: Some(Font { color: font_color }),
    }
}
