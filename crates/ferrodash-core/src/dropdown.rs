//! Mutual exclusion across the four comparison window dropdowns.
//!
//! Each dropdown offers the window universe minus whatever the other three
//! currently hold, so no two comparison panels can show the same window.

use serde::{Deserialize, Serialize};

use crate::Window;

/// Number of comparison panels.
pub const WINDOW_FILTERS: usize = 4;

/// `{label, value}` pair rendered by a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl From<&Window> for DropdownOption {
    fn from(window: &Window) -> Self {
        Self {
            label: window.to_string(),
            value: window.to_string(),
        }
    }
}

/// Options available to each of the four window dropdowns.
///
/// Universe order is preserved. Selections outside the universe, and repeats
/// of an already removed value, remove nothing.
pub fn window_options(
    universe: &[Window],
    selections: &[Option<Window>; WINDOW_FILTERS],
) -> [Vec<Window>; WINDOW_FILTERS] {
    std::array::from_fn(|target| {
        let mut options = universe.to_vec();
        for (index, selection) in selections.iter().enumerate() {
            if index == target {
                continue;
            }
            if let Some(selected) = selection {
                remove_first(&mut options, selected);
            }
        }
        options
    })
}

fn remove_first(options: &mut Vec<Window>, value: &Window) {
    if let Some(position) = options.iter().position(|option| option == value) {
        options.remove(position);
    }
}

/// Selections that name a window outside the universe.
pub fn stale_selections<'a>(
    universe: &[Window],
    selections: &'a [Option<Window>; WINDOW_FILTERS],
) -> Vec<&'a Window> {
    selections
        .iter()
        .flatten()
        .filter(|selected| !universe.contains(selected))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn w(name: &str) -> Window {
        Window::parse(name).expect("valid window")
    }

    fn universe() -> Vec<Window> {
        ["A", "B", "C", "D"].into_iter().map(w).collect()
    }

    fn names(options: &[Window]) -> Vec<&str> {
        options.iter().map(Window::as_str).collect()
    }

    #[test]
    fn two_selections_prune_the_others() {
        let options = window_options(&universe(), &[Some(w("A")), Some(w("B")), None, None]);

        assert_eq!(names(&options[0]), vec!["A", "C", "D"]);
        assert_eq!(names(&options[1]), vec!["B", "C", "D"]);
        assert_eq!(names(&options[2]), vec!["C", "D"]);
        assert_eq!(names(&options[3]), vec!["C", "D"]);
    }

    #[test]
    fn nothing_selected_offers_full_universe_everywhere() {
        let options = window_options(&universe(), &[None, None, None, None]);
        assert!(options.iter().all(|opts| *opts == universe()));
    }

    #[test]
    fn stale_selection_is_a_no_op() {
        let options = window_options(&universe(), &[Some(w("Z")), None, None, None]);
        assert_eq!(options[1], universe());
        assert_eq!(options[0], universe());
    }

    #[test]
    fn duplicate_selections_do_not_fail() {
        let options = window_options(&universe(), &[Some(w("A")), Some(w("A")), Some(w("A")), None]);
        assert_eq!(names(&options[3]), vec!["B", "C", "D"]);
        assert_eq!(names(&options[0]), vec!["B", "C", "D"]);
    }

    #[test]
    fn every_tuple_matches_set_difference() {
        let candidates: Vec<Option<Window>> = vec![None, Some(w("A")), Some(w("B")), Some(w("X"))];
        let universe = universe();

        for a in &candidates {
            for b in &candidates {
                for c in &candidates {
                    for d in &candidates {
                        let selections = [a.clone(), b.clone(), c.clone(), d.clone()];
                        let options = window_options(&universe, &selections);

                        for (target, opts) in options.iter().enumerate() {
                            let others: BTreeSet<&Window> = selections
                                .iter()
                                .enumerate()
                                .filter(|(index, _)| *index != target)
                                .filter_map(|(_, selection)| selection.as_ref())
                                .collect();
                            let expected: BTreeSet<&Window> =
                                universe.iter().filter(|w| !others.contains(w)).collect();
                            let actual: BTreeSet<&Window> = opts.iter().collect();
                            assert_eq!(actual, expected, "selections {selections:?} target {target}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn reports_stale_selections() {
        let selections = [Some(w("A")), Some(w("Z")), None, None];
        assert_eq!(stale_selections(&universe(), &selections), vec![&w("Z")]);
    }
}
