//! Capability traits for items held by the engine.
//!
//! Identity is the only required capability. Filtering and match-position
//! reporting are layered on top so plain items never have to pretend to be
//! searchable. Match positions are a separate, optional trait reached
//! through [`FilterItem::as_match_positions`].

/// An item with a unique, stable identity.
///
/// The ID is what selection tracks, so it must survive filtering, regrouping
/// and re-ordering of the underlying collection.
pub trait Item: Clone {
    /// Unique, stable identifier for this item.
    fn id(&self) -> String;
}

/// An item that can be matched against a filter query.
pub trait FilterItem: Item {
    /// The text the filter query is matched against.
    fn filter_value(&self) -> String;

    /// This item's match-position capability, if it has one.
    ///
    /// Items implementing [`MatchPositions`] return `Some(self)`; the filter
    /// then records every match offset, available from
    /// [`Filter::match_positions`](crate::Filter::match_positions).
    fn as_match_positions(&self) -> Option<&dyn MatchPositions> {
        None
    }
}

/// An item that wants every occurrence of the query located for highlighting.
pub trait MatchPositions {
    /// The text match offsets are computed against, usually the rendered
    /// label. Whether the item matches at all is still decided by
    /// [`FilterItem::filter_value`].
    fn highlight_text(&self) -> String;
}

impl Item for String {
    fn id(&self) -> String {
        self.clone()
    }
}

impl FilterItem for String {
    fn filter_value(&self) -> String {
        self.clone()
    }
}
