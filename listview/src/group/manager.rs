//! Group manager: flattens groups and their items into one slot sequence.

use log::{debug, trace};

use crate::item::Item;

use super::state::Group;

/// One addressable position in the flattened sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A group header.
    Header { group: usize },
    /// An item of an expanded group.
    Item { group: usize, item: usize },
}

impl Slot {
    pub fn is_header(&self) -> bool {
        matches!(self, Slot::Header { .. })
    }

    /// Index of the group this slot belongs to.
    pub fn group(&self) -> usize {
        match *self {
            Slot::Header { group } | Slot::Item { group, .. } => group,
        }
    }

    /// Index of the item within its group, `None` for headers.
    pub fn item(&self) -> Option<usize> {
        match *self {
            Slot::Header { .. } => None,
            Slot::Item { item, .. } => Some(item),
        }
    }
}

/// Ordered groups plus the derived slot sequence and a cursor into it.
///
/// The slot sequence is rebuilt after every structural change, so
/// [`GroupManager::count`] always matches what a renderer walking the groups
/// would emit: one header per group, then the items of expanded groups.
#[derive(Debug, Clone)]
pub struct GroupManager<T> {
    /// Groups in display order.
    groups: Vec<Group<T>>,
    /// Flattened slots (rebuilt on every structural change).
    slots: Vec<Slot>,
    /// Cursor (index into `slots`).
    cursor: usize,
}

impl<T> Default for GroupManager<T> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            slots: Vec::new(),
            cursor: 0,
        }
    }
}

impl<T: Item> GroupManager<T> {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager over the given groups.
    pub fn with_groups(groups: Vec<Group<T>>) -> Self {
        let mut manager = Self::new();
        manager.set_groups(groups);
        manager
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Replace all groups.
    pub fn set_groups(&mut self, groups: Vec<Group<T>>) {
        self.groups = groups;
        self.flatten();
        self.clamp_cursor();
    }

    /// Append a group.
    pub fn add_group(&mut self, group: Group<T>) {
        self.groups.push(group);
        self.flatten();
        self.clamp_cursor();
    }

    /// Append an item to group `index`. Returns false for an unknown group
    /// or a duplicate ID.
    pub fn add_item(&mut self, index: usize, item: T) -> bool {
        let added = self
            .groups
            .get_mut(index)
            .is_some_and(|group| group.push(item));
        if added {
            self.reflatten_keeping_cursor();
        }
        added
    }

    pub fn groups(&self) -> &[Group<T>] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&Group<T>> {
        self.groups.get(index)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of slots in the flattened sequence.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of items across all groups, including hidden ones.
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Toggle expansion of group `index`.
    pub fn toggle_group_at(&mut self, index: usize) {
        if let Some(group) = self.groups.get_mut(index) {
            group.toggle();
            debug!(
                "Group {:?} {}",
                group.title(),
                if group.is_expanded() { "expanded" } else { "collapsed" }
            );
            self.reflatten_keeping_cursor();
        }
    }

    /// Toggle the group whose header is under the cursor.
    ///
    /// Does nothing when the cursor is on an item.
    pub fn toggle_current_group(&mut self) {
        if let Some(Slot::Header { group }) = self.get_item_at(self.cursor) {
            self.toggle_group_at(group);
        }
    }

    pub fn expand_group(&mut self, index: usize) {
        self.set_group_expanded(index, true);
    }

    pub fn collapse_group(&mut self, index: usize) {
        self.set_group_expanded(index, false);
    }

    pub fn set_group_expanded(&mut self, index: usize, expanded: bool) {
        if let Some(group) = self.groups.get_mut(index)
            && group.is_expanded() != expanded
        {
            group.set_expanded(expanded);
            self.reflatten_keeping_cursor();
        }
    }

    pub fn expand_all(&mut self) {
        self.set_all_expanded(true);
    }

    pub fn collapse_all(&mut self) {
        self.set_all_expanded(false);
    }

    fn set_all_expanded(&mut self, expanded: bool) {
        for group in &mut self.groups {
            group.set_expanded(expanded);
        }
        self.reflatten_keeping_cursor();
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// The slot at `index`, or `None` when out of range.
    pub fn get_item_at(&self, index: usize) -> Option<Slot> {
        self.slots.get(index).copied()
    }

    /// The item at `index`, or `None` for headers and out-of-range indices.
    pub fn item_at(&self, index: usize) -> Option<&T> {
        match self.get_item_at(index)? {
            Slot::Header { .. } => None,
            Slot::Item { group, item } => self.groups.get(group)?.get(item),
        }
    }

    /// The group whose header is at `index`, or `None` for items.
    pub fn group_at(&self, index: usize) -> Option<&Group<T>> {
        match self.get_item_at(index)? {
            Slot::Header { group } => self.groups.get(group),
            Slot::Item { .. } => None,
        }
    }

    /// Flat index of the item with the given ID.
    pub fn find_item_id(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|slot| match *slot {
            Slot::Header { .. } => false,
            Slot::Item { group, item } => self.groups[group].items()[item].id() == id,
        })
    }

    /// Flat index of the header of the group with the given title.
    pub fn find_group_title(&self, title: &str) -> Option<usize> {
        self.slots.iter().position(|slot| match *slot {
            Slot::Header { group } => self.groups[group].title() == title,
            Slot::Item { .. } => false,
        })
    }

    /// Flat index of the header of group `index`.
    pub fn header_index(&self, index: usize) -> Option<usize> {
        if index >= self.groups.len() {
            return None;
        }
        Some(self.groups[..index].iter().map(Group::slot_count).sum())
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Place the cursor on `index` (clamped to the last slot).
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
        self.clamp_cursor();
    }

    /// The item under the cursor, `None` when it is on a header.
    pub fn current_item(&self) -> Option<&T> {
        self.item_at(self.cursor)
    }

    /// The group under the cursor, `None` when it is on an item.
    pub fn current_group(&self) -> Option<&Group<T>> {
        self.group_at(self.cursor)
    }

    /// The slot under the cursor.
    pub fn current_slot(&self) -> Option<Slot> {
        self.get_item_at(self.cursor)
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.slots.len().saturating_sub(1));
    }

    // -------------------------------------------------------------------------
    // Flattening
    // -------------------------------------------------------------------------

    /// Rebuild the slot sequence from the groups.
    fn flatten(&mut self) {
        self.slots.clear();
        for (group_index, group) in self.groups.iter().enumerate() {
            self.slots.push(Slot::Header { group: group_index });
            if group.is_expanded() {
                self.slots
                    .extend((0..group.len()).map(|item| Slot::Item {
                        group: group_index,
                        item,
                    }));
            }
        }
        trace!(
            "Flattened {} group(s) into {} slot(s)",
            self.groups.len(),
            self.slots.len()
        );
    }

    /// Rebuild after an expansion change, keeping the cursor on the same
    /// slot. A cursor on an item that became hidden moves to its header.
    fn reflatten_keeping_cursor(&mut self) {
        let anchor = self.current_slot();
        self.flatten();
        if let Some(index) = anchor.and_then(|slot| self.locate(slot)) {
            self.cursor = index;
        }
        self.clamp_cursor();
    }

    /// Flat index of `slot` in the current sequence, or of its header when the
    /// item is hidden.
    fn locate(&self, slot: Slot) -> Option<usize> {
        let header = self.header_index(slot.group())?;
        match slot.item() {
            Some(item) if self.groups[slot.group()].is_expanded() => {
                (item < self.groups[slot.group()].len()).then_some(header + 1 + item)
            }
            _ => Some(header),
        }
    }
}
