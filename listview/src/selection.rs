//! Selection state keyed by item ID.
//!
//! Selection uses string IDs rather than positions, so it is unaffected by
//! filtering, collapsing groups, or re-ordering. Reconciling selected items
//! that are currently hidden is up to the caller.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::item::Item;

/// Selection mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one item is selected; selecting another replaces it.
    #[default]
    Single,
    /// Any number of items can be selected.
    Multiple,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Single => f.write_str("single"),
            SelectionMode::Multiple => f.write_str("multiple"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(SelectionMode::Single),
            "multiple" | "multi" => Ok(SelectionMode::Multiple),
            _ => Err(ConfigError::UnknownSelectionMode(s.to_string())),
        }
    }
}

/// Set of selected item IDs.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    mode: SelectionMode,
    selected: HashSet<String>,
}

impl SelectionManager {
    /// Create an empty selection in the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: HashSet::new(),
        }
    }

    /// Create an empty single-selection.
    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    /// Create an empty multi-selection.
    pub fn multiple() -> Self {
        Self::new(SelectionMode::Multiple)
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Change the mode. Switching to single mode with several items selected
    /// clears the selection.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if mode == SelectionMode::Single && self.selected.len() > 1 {
            debug!(
                "Selection: clearing {} item(s) on switch to single mode",
                self.selected.len()
            );
            self.selected.clear();
        }
        self.mode = mode;
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Select an ID. In single mode this replaces the current selection.
    /// Returns true if the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected.contains(id) {
            return false;
        }
        if self.mode == SelectionMode::Single {
            self.selected.clear();
        }
        self.selected.insert(id.to_string())
    }

    /// Deselect an ID. Returns true if it was selected.
    pub fn deselect(&mut self, id: &str) -> bool {
        self.selected.remove(id)
    }

    /// Flip the selection of an ID. Returns true if it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.deselect(id) {
            false
        } else {
            self.select(id);
            true
        }
    }

    /// Select every item. Returns the IDs that were newly selected.
    ///
    /// Single mode cannot hold more than one item, so there this leaves the
    /// selection unchanged.
    pub fn select_all<T: Item>(&mut self, items: &[T]) -> Vec<String> {
        if self.mode == SelectionMode::Single {
            debug!("Selection: select_all ignored in single mode");
            return Vec::new();
        }
        let mut added = Vec::new();
        for item in items {
            let id = item.id();
            if self.selected.insert(id.clone()) {
                added.push(id);
            }
        }
        added
    }

    /// Clear the selection. Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Keep only the IDs for which `keep` returns true.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        self.selected.retain(|id| keep(id));
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// All selected IDs, sorted for deterministic ordering.
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// The selected ID in single mode.
    pub fn selected_single(&self) -> Option<&str> {
        if self.mode != SelectionMode::Single {
            return None;
        }
        self.selected.iter().next().map(String::as_str)
    }

    /// The items of `items` that are selected, in slice order.
    pub fn selected_items<'a, T: Item>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .filter(|item| self.selected.contains(&item.id()))
            .collect()
    }
}
