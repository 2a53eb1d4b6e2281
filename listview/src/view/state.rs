//! List view state.

use log::debug;

use crate::config::ListConfig;
use crate::filter::Filter;
use crate::group::{Group, GroupManager, Slot};
use crate::item::FilterItem;
use crate::selection::SelectionManager;
use crate::viewport::Viewport;

use super::action::Action;

/// A slot inside the current window, with everything needed to paint it.
#[derive(Debug)]
pub struct Row<'a, T> {
    /// Flat index of the slot.
    pub index: usize,
    /// Header or item.
    pub slot: Slot,
    /// The group the slot belongs to.
    pub group: &'a Group<T>,
    /// The item, `None` for headers.
    pub item: Option<&'a T>,
    /// Whether the cursor is on this row.
    pub focused: bool,
    /// Whether the row's item is selected.
    pub selected: bool,
}

/// Where the cursor was before a rebuild, in terms that survive one.
#[derive(Debug)]
enum Anchor {
    Item { id: String, group: usize },
    Group(usize),
}

/// Grouped, filterable, selectable list with a scroll window.
///
/// Owns the source groups and derives everything else from them:
/// - the [`Filter`] prunes each group's items,
/// - a [`GroupManager`] flattens the pruned groups into slots,
/// - the [`Viewport`] scrolls over those slots,
/// - the [`SelectionManager`] tracks selected IDs independently of both.
///
/// After every call the viewport total equals the slot count and the
/// viewport cursor equals the group manager cursor.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    /// Configuration the view was created with.
    config: ListConfig,
    /// Groups as supplied, unfiltered. Expansion state lives here.
    source: Vec<Group<T>>,
    /// Source index of each group currently shown.
    shown: Vec<usize>,
    /// Query state.
    filter: Filter,
    /// Filtered groups and their slots.
    groups: GroupManager<T>,
    /// Scroll window over the slots.
    viewport: Viewport,
    /// Selected IDs.
    selection: SelectionManager,
}

impl<T: FilterItem> Default for ListView<T> {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

impl<T: FilterItem> ListView<T> {
    /// Create an empty list view.
    pub fn new(config: ListConfig) -> Self {
        Self {
            filter: Filter::new().with_case_sensitive(config.case_sensitive),
            viewport: Viewport::new(config.visible, 0),
            selection: SelectionManager::new(config.selection_mode),
            source: Vec::new(),
            shown: Vec::new(),
            groups: GroupManager::new(),
            config,
        }
    }

    /// Create a list view over the given groups.
    pub fn with_groups(config: ListConfig, groups: Vec<Group<T>>) -> Self {
        let mut view = Self::new(config);
        view.set_groups(groups);
        view
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Groups as supplied, before filtering.
    pub fn source(&self) -> &[Group<T>] {
        &self.source
    }

    /// Filtered groups and their flattened slots.
    pub fn groups(&self) -> &GroupManager<T> {
        &self.groups
    }

    /// The query state. Groups are filtered one at a time, so per-row spans
    /// should come from [`Filter::ranges_in`] rather than [`Filter::matches`].
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Mutable access to the selection. Selection is keyed by ID, so changing
    /// it cannot break the other invariants.
    pub fn selection_mut(&mut self) -> &mut SelectionManager {
        &mut self.selection
    }

    pub fn query(&self) -> &str {
        self.filter.query()
    }

    pub fn cursor(&self) -> usize {
        self.viewport.cursor()
    }

    /// Number of slots currently addressable.
    pub fn len(&self) -> usize {
        self.groups.count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn current_item(&self) -> Option<&T> {
        self.groups.current_item()
    }

    pub fn current_group(&self) -> Option<&Group<T>> {
        self.groups.current_group()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    // -------------------------------------------------------------------------
    // Source
    // -------------------------------------------------------------------------

    /// Replace all groups.
    pub fn set_groups(&mut self, groups: Vec<Group<T>>) {
        self.source = groups;
        self.rebuild();
    }

    /// Append a group, expanded according to the config.
    pub fn push_group(&mut self, title: impl Into<String>, items: Vec<T>) {
        let group = Group::new(title, items).with_expanded(self.config.expanded_by_default);
        self.source.push(group);
        self.rebuild();
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Set the query and re-filter from the source.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set_query(query);
        self.rebuild();
    }

    /// Drop the query, restoring every group and item.
    pub fn clear_query(&mut self) {
        if !self.filter.is_active() {
            return;
        }
        self.filter.clear();
        self.rebuild();
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.filter.set_case_sensitive(case_sensitive);
        self.rebuild();
    }

    /// Wrap every occurrence of the query in `text` with the markers.
    pub fn highlight(&self, text: &str, before: &str, after: &str) -> String {
        self.filter.highlight(text, before, after)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    pub fn move_up(&mut self) {
        self.viewport.move_up();
        self.sync_cursor();
    }

    pub fn move_down(&mut self) {
        self.viewport.move_down();
        self.sync_cursor();
    }

    pub fn page_up(&mut self) {
        self.viewport.page_up();
        self.sync_cursor();
    }

    pub fn page_down(&mut self) {
        self.viewport.page_down();
        self.sync_cursor();
    }

    pub fn half_page_up(&mut self) {
        self.viewport.half_page_up();
        self.sync_cursor();
    }

    pub fn half_page_down(&mut self) {
        self.viewport.half_page_down();
        self.sync_cursor();
    }

    pub fn move_to_top(&mut self) {
        self.viewport.move_to_top();
        self.sync_cursor();
    }

    pub fn move_to_bottom(&mut self) {
        self.viewport.move_to_bottom();
        self.sync_cursor();
    }

    /// Place the cursor on slot `index` (clamped).
    pub fn set_cursor(&mut self, index: usize) {
        self.viewport.set_cursor(index);
        self.sync_cursor();
    }

    /// Move the cursor to the item with the given ID, if it is shown.
    pub fn focus_item(&mut self, id: &str) -> bool {
        match self.groups.find_item_id(id) {
            Some(index) => {
                self.set_cursor(index);
                true
            }
            None => false,
        }
    }

    /// Scroll so `index` is visible without moving the cursor.
    pub fn scroll_to(&mut self, index: usize) {
        self.viewport.scroll_to(index);
    }

    /// Resize the window.
    pub fn set_visible(&mut self, visible: usize) {
        self.viewport.set_visible(visible);
        self.sync_cursor();
    }

    // -------------------------------------------------------------------------
    // Groups
    // -------------------------------------------------------------------------

    /// Expand or collapse the group whose header is under the cursor.
    pub fn toggle_current_group(&mut self) {
        self.groups.toggle_current_group();
        self.store_expansion();
        self.sync_viewport();
    }

    /// Expand or collapse shown group `index`.
    pub fn toggle_group_at(&mut self, index: usize) {
        self.groups.toggle_group_at(index);
        self.store_expansion();
        self.sync_viewport();
    }

    /// Expand every group, including ones hidden by the filter.
    pub fn expand_all(&mut self) {
        self.set_all_expanded(true);
    }

    /// Collapse every group, including ones hidden by the filter.
    pub fn collapse_all(&mut self) {
        self.set_all_expanded(false);
    }

    fn set_all_expanded(&mut self, expanded: bool) {
        for group in &mut self.source {
            group.set_expanded(expanded);
        }
        if expanded {
            self.groups.expand_all();
        } else {
            self.groups.collapse_all();
        }
        self.sync_viewport();
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of the item under the cursor.
    ///
    /// Returns false when the cursor is on a header.
    pub fn toggle_current_selection(&mut self) -> bool {
        match self.groups.current_item().map(|item| item.id()) {
            Some(id) => {
                self.selection.toggle(&id);
                true
            }
            None => false,
        }
    }

    /// Select every item that passes the filter, collapsed groups included.
    pub fn select_all(&mut self) -> Vec<String> {
        let items: Vec<T> = self
            .groups
            .groups()
            .iter()
            .flat_map(|group| group.items().iter().cloned())
            .collect();
        self.selection.select_all(&items)
    }

    pub fn clear_selection(&mut self) -> Vec<String> {
        self.selection.clear()
    }

    /// Selected items, in source order, whether or not they are shown.
    pub fn selected_items(&self) -> Vec<&T> {
        self.source
            .iter()
            .flat_map(|group| self.selection.selected_items(group.items()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Painting
    // -------------------------------------------------------------------------

    /// Rows of the current window.
    pub fn visible_rows(&self) -> Vec<Row<'_, T>> {
        let cursor = self.viewport.cursor();
        self.viewport
            .range()
            .filter_map(|index| {
                let slot = self.groups.get_item_at(index)?;
                let group = self.groups.group(slot.group())?;
                let item = slot.item().and_then(|i| group.get(i));
                let selected = item.is_some_and(|item| self.selection.is_selected(&item.id()));
                Some(Row {
                    index,
                    slot,
                    group,
                    item,
                    focused: index == cursor,
                    selected,
                })
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Perform a semantic action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::PageUp => self.page_up(),
            Action::PageDown => self.page_down(),
            Action::HalfPageUp => self.half_page_up(),
            Action::HalfPageDown => self.half_page_down(),
            Action::Top => self.move_to_top(),
            Action::Bottom => self.move_to_bottom(),
            Action::ToggleGroup => self.toggle_current_group(),
            Action::ExpandAll => self.expand_all(),
            Action::CollapseAll => self.collapse_all(),
            Action::ToggleSelection => {
                self.toggle_current_selection();
            }
            Action::SelectAll => {
                self.select_all();
            }
            Action::ClearSelection => {
                self.clear_selection();
            }
            Action::ClearQuery => self.clear_query(),
        }
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    /// Re-filter the source and rebuild the shown groups, keeping the cursor
    /// on the same item or group where possible.
    fn rebuild(&mut self) {
        let anchor = self.anchor();

        let mut groups = Vec::with_capacity(self.source.len());
        self.shown.clear();
        for (index, group) in self.source.iter().enumerate() {
            let items = self.filter.apply(group.items());
            if items.is_empty() && self.filter.is_active() && self.config.hide_empty_groups {
                continue;
            }
            groups.push(Group::new(group.title(), items).with_expanded(group.is_expanded()));
            self.shown.push(index);
        }
        self.groups.set_groups(groups);

        if let Some(index) = anchor.and_then(|anchor| self.locate(&anchor)) {
            self.groups.set_cursor(index);
        }
        debug!(
            "ListView rebuilt: {} of {} group(s) shown, {} slot(s)",
            self.shown.len(),
            self.source.len(),
            self.groups.count()
        );
        self.sync_viewport();
    }

    fn anchor(&self) -> Option<Anchor> {
        let slot = self.groups.current_slot()?;
        let group = *self.shown.get(slot.group())?;
        match self.groups.current_item() {
            Some(item) => Some(Anchor::Item {
                id: item.id(),
                group,
            }),
            None => Some(Anchor::Group(group)),
        }
    }

    /// Slot of `anchor` in the current flattening.
    ///
    /// An item is only looked up inside its own group, since IDs are unique
    /// per group, not across the list. A hidden item resolves to its header.
    fn locate(&self, anchor: &Anchor) -> Option<usize> {
        let (source, id) = match anchor {
            Anchor::Item { id, group } => (*group, Some(id)),
            Anchor::Group(group) => (*group, None),
        };
        let shown = self.shown.iter().position(|&s| s == source)?;
        let header = self.groups.header_index(shown)?;
        let group = self.groups.group(shown)?;
        match id.and_then(|id| group.position(id)) {
            Some(position) if group.is_expanded() => Some(header + 1 + position),
            _ => Some(header),
        }
    }

    /// Copy expansion state of the shown groups back to the source.
    fn store_expansion(&mut self) {
        for (group, &source) in self.groups.groups().iter().zip(&self.shown) {
            self.source[source].set_expanded(group.is_expanded());
        }
    }

    fn sync_viewport(&mut self) {
        self.viewport.set_total(self.groups.count());
        self.viewport.set_cursor(self.groups.cursor());
    }

    fn sync_cursor(&mut self) {
        self.groups.set_cursor(self.viewport.cursor());
    }
}
