//! Selection state: the user's current color and option choices.
//!
//! RULE: Apart from a full reset, toggle_option() is the only path that
//! changes selected options.
//! Every operation here is pure: it takes a state and returns a new one.
//! Names absent from the catalog leave the state untouched, so a
//! selection never refers to anything the catalog does not contain.

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_color:   String,
    pub selected_options: BTreeSet<String>,
}

impl SelectionState {
    /// Initial state: first color, plus every default-selected option.
    pub fn initial(catalog: &Catalog) -> Self {
        Self {
            selected_color: catalog
                .default_color()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            selected_options: catalog
                .default_option_names()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_selected(&self, option_name: &str) -> bool {
        self.selected_options.contains(option_name)
    }
}

/// Overwrite the selected color. Unknown color names are ignored.
pub fn select_color(selection: &SelectionState, catalog: &Catalog, color_name: &str) -> SelectionState {
    let mut next = selection.clone();
    if catalog.color(color_name).is_some() {
        next.selected_color = color_name.to_string();
    }
    next
}

/// Toggle one option.
///
/// Turning on an option that declares `incompatible_with` first evicts
/// every option it lists. The rule is directional: turning on an option
/// without its own list never evicts anything, even when an already
/// selected option lists it.
pub fn toggle_option(selection: &SelectionState, catalog: &Catalog, option_name: &str) -> SelectionState {
    let mut next = selection.clone();

    // Stale names can still be switched off.
    if next.selected_options.remove(option_name) {
        return next;
    }

    let Some(option) = catalog.option(option_name) else {
        return next;
    };

    for other in &option.incompatible_with {
        next.selected_options.remove(other);
    }
    next.selected_options.insert(option_name.to_string());
    next
}

/// Names that toggling `option_name` on would evict from `selection`.
pub fn evictions(selection: &SelectionState, catalog: &Catalog, option_name: &str) -> Vec<String> {
    if selection.is_selected(option_name) {
        return Vec::new();
    }
    catalog
        .option(option_name)
        .map(|o| {
            o.incompatible_with
                .iter()
                .filter(|n| selection.is_selected(n))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
