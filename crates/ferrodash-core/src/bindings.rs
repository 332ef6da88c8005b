//! Reactive binding graph of the dashboard page.
//!
//! Each binding names the input slots that trigger it and the output slots
//! it refreshes. The page fetches this table and, when an input changes,
//! runs exactly the bindings listing that input.

use serde::Serialize;

/// A widget property, e.g. the `value` of `stock-dropdown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Slot {
    pub id: &'static str,
    pub property: &'static str,
}

const fn slot(id: &'static str, property: &'static str) -> Slot {
    Slot { id, property }
}

/// Where a binding is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Runtime {
    /// Evaluated by the server; `endpoint` is the callback route.
    Server,
    /// Evaluated in the browser (stylesheet swap).
    Client,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub name: &'static str,
    pub runtime: Runtime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<&'static str>,
    pub inputs: &'static [Slot],
    pub outputs: &'static [Slot],
}

pub const STOCK_DROPDOWN: &str = "stock-dropdown";
pub const THEME_SWITCH: &str = "theme-switch";
pub const WINDOW_FILTER_IDS: [&str; 4] = [
    "window-filter1",
    "window-filter2",
    "window-filter3",
    "window-filter4",
];

const WINDOW_VALUES: [Slot; 4] = [
    slot("window-filter1", "value"),
    slot("window-filter2", "value"),
    slot("window-filter3", "value"),
    slot("window-filter4", "value"),
];

const UPDATE_GRAPH_INPUTS: [Slot; 6] = [
    slot(STOCK_DROPDOWN, "value"),
    WINDOW_VALUES[0],
    WINDOW_VALUES[1],
    WINDOW_VALUES[2],
    WINDOW_VALUES[3],
    slot(THEME_SWITCH, "value"),
];

const UPDATE_GRAPH_OUTPUTS: [Slot; 11] = [
    slot("price-chart1", "figure"),
    slot("price-chart2", "figure"),
    slot("row1-table1", "data"),
    slot("row2-table1", "data"),
    slot("row2-table2", "data"),
    slot("row2-table3", "data"),
    slot("row2-table4", "data"),
    slot("row3-table1", "data"),
    slot("row3-table2", "data"),
    slot("row3-table3", "data"),
    slot("row3-table4", "data"),
];

const UPDATE_DROPDOWN_OUTPUTS: [Slot; 4] = [
    slot("window-filter1", "options"),
    slot("window-filter2", "options"),
    slot("window-filter3", "options"),
    slot("window-filter4", "options"),
];

const THEME_INPUT: [Slot; 1] = [slot(THEME_SWITCH, "value")];

const CHANGE_COLOR_OUTPUTS: [Slot; 3] = [
    slot("app-title", "style"),
    slot("row2-title", "style"),
    slot("row3-title", "style"),
];

const STYLESHEET_OUTPUT: [Slot; 1] = [slot("theme-stylesheet", "href")];

pub const UPDATE_GRAPH: &str = "update-graph";
pub const UPDATE_DROPDOWN: &str = "update-dropdown";
pub const CHANGE_COLOR: &str = "change-color";
pub const SWAP_STYLESHEET: &str = "swap-stylesheet";

pub static BINDINGS: [Binding; 4] = [
    Binding {
        name: UPDATE_GRAPH,
        runtime: Runtime::Server,
        endpoint: Some("/api/callbacks/update-graph"),
        inputs: &UPDATE_GRAPH_INPUTS,
        outputs: &UPDATE_GRAPH_OUTPUTS,
    },
    Binding {
        name: UPDATE_DROPDOWN,
        runtime: Runtime::Server,
        endpoint: Some("/api/callbacks/update-dropdown"),
        inputs: &WINDOW_VALUES,
        outputs: &UPDATE_DROPDOWN_OUTPUTS,
    },
    Binding {
        name: CHANGE_COLOR,
        runtime: Runtime::Server,
        endpoint: Some("/api/callbacks/change-color"),
        inputs: &THEME_INPUT,
        outputs: &CHANGE_COLOR_OUTPUTS,
    },
    Binding {
        name: SWAP_STYLESHEET,
        runtime: Runtime::Client,
        endpoint: None,
        inputs: &THEME_INPUT,
        outputs: &STYLESHEET_OUTPUT,
    },
];

/// Bindings triggered by a change of the given input widget.
pub fn bindings_for_input(id: &str) -> Vec<&'static Binding> {
    BINDINGS
        .iter()
        .filter(|binding| binding.inputs.iter().any(|input| input.id == id))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn names(bindings: Vec<&'static Binding>) -> Vec<&'static str> {
        bindings.into_iter().map(|binding| binding.name).collect()
    }

    #[test]
    fn stock_dropdown_only_triggers_graph_update() {
        assert_eq!(names(bindings_for_input(STOCK_DROPDOWN)), vec![UPDATE_GRAPH]);
    }

    #[test]
    fn window_filters_trigger_graph_and_dropdown_updates() {
        for id in WINDOW_FILTER_IDS {
            assert_eq!(
                names(bindings_for_input(id)),
                vec![UPDATE_GRAPH, UPDATE_DROPDOWN]
            );
        }
    }

    #[test]
    fn theme_switch_triggers_graph_colors_and_stylesheet() {
        assert_eq!(
            names(bindings_for_input(THEME_SWITCH)),
            vec![UPDATE_GRAPH, CHANGE_COLOR, SWAP_STYLESHEET]
        );
    }

    #[test]
    fn no_output_is_written_by_two_bindings() {
        let mut seen = HashSet::new();
        for binding in &BINDINGS {
            for output in binding.outputs {
                assert!(seen.insert(*output), "{output:?} written twice");
            }
        }
        assert_eq!(seen.len(), 11 + 4 + 3 + 1);
    }

    #[test]
    fn server_bindings_have_endpoints() {
        for binding in &BINDINGS {
            assert_eq!(
                binding.endpoint.is_some(),
                binding.runtime == Runtime::Server,
                "{}",
                binding.name
            );
        }
    }
}
