//! Render-agnostic engine for scrollable, grouped, filterable, selectable
//! lists in a terminal viewport.
//!
//! The building blocks can be used on their own:
//! - [`Viewport`] - cursor and scroll window over a virtualized sequence
//! - [`Filter`] - substring query with match positions for highlighting
//! - [`Group`] / [`GroupManager`] - collapsible groups flattened into slots
//! - [`SelectionManager`] - ID-based single or multiple selection
//!
//! [`ListView`] combines all four and keeps them consistent.

pub mod config;
pub mod filter;
pub mod group;
pub mod item;
pub mod selection;
pub mod view;
pub mod viewport;

pub use config::{ConfigError, ListConfig};
pub use filter::{Filter, FilterMatch};
pub use group::{Group, GroupManager, Slot};
pub use item::{FilterItem, Item, MatchPositions};
pub use selection::{SelectionManager, SelectionMode};
pub use view::{Action, ListView, Row};
pub use viewport::{DEFAULT_VISIBLE, Viewport};

pub mod prelude {
    pub use crate::config::{ConfigError, ListConfig};
    pub use crate::filter::Filter;
    pub use crate::group::{Group, GroupManager, Slot};
    pub use crate::item::{FilterItem, Item, MatchPositions};
    pub use crate::selection::{SelectionManager, SelectionMode};
    pub use crate::view::{Action, ListView, Row};
    pub use crate::viewport::Viewport;
}
