//! Semantic actions a widget can forward to a list view.

/// A discrete list operation, already decoupled from any key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    Top,
    Bottom,
    /// Expand or collapse the group whose header is under the cursor.
    ToggleGroup,
    ExpandAll,
    CollapseAll,
    /// Select or deselect the item under the cursor.
    ToggleSelection,
    /// Select every item that passes the filter.
    SelectAll,
    ClearSelection,
    ClearQuery,
}
