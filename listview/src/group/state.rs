//! A single named, collapsible group of items.

use std::collections::HashSet;

use log::debug;

use crate::item::Item;

/// An ordered, titled, collapsible container of items.
///
/// A group does not know about flattening; after toggling a group that is
/// owned by a [`GroupManager`](super::GroupManager), go through the manager
/// so the slot sequence is rebuilt.
#[derive(Debug, Clone)]
pub struct Group<T> {
    /// Header text.
    title: String,
    /// Items in insertion order, unique by ID.
    items: Vec<T>,
    /// Whether the items are shown below the header.
    expanded: bool,
}

impl<T: Item> Group<T> {
    /// Create an expanded group. Items repeating an earlier ID are dropped.
    pub fn new(title: impl Into<String>, items: Vec<T>) -> Self {
        let title = title.into();
        let before = items.len();
        let mut seen = HashSet::new();
        let items: Vec<T> = items.into_iter().filter(|i| seen.insert(i.id())).collect();
        if items.len() != before {
            debug!(
                "Group {:?}: dropped {} duplicate item(s)",
                title,
                before - items.len()
            );
        }
        Self {
            title,
            items,
            expanded: true,
        }
    }

    /// Set the initial expansion state (builder form).
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the expansion state.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Append an item. Returns false if an item with the same ID is present.
    pub fn push(&mut self, item: T) -> bool {
        let id = item.id();
        if self.items.iter().any(|i| i.id() == id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Position of the item with the given ID.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id() == id)
    }

    /// Number of slots this group occupies once flattened.
    pub(crate) fn slot_count(&self) -> usize {
        if self.expanded {
            1 + self.items.len()
        } else {
            1
        }
    }
}
