//! Named, collapsible groups flattened into a single slot sequence.
//!
//! # Example
//!
//! ```
//! use listview::{Group, GroupManager, Slot};
//!
//! let mut groups = GroupManager::with_groups(vec![
//!     Group::new("Fruit", vec!["apple".to_string(), "pear".to_string()]),
//!     Group::new("Veg", vec!["leek".to_string()]),
//! ]);
//! assert_eq!(groups.count(), 5);
//!
//! groups.collapse_group(0);
//! assert_eq!(groups.count(), 3);
//! assert_eq!(groups.get_item_at(1), Some(Slot::Header { group: 1 }));
//! ```

mod manager;
mod state;

pub use manager::{GroupManager, Slot};
pub use state::Group;
