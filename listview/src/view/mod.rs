//! List view - groups, filter, viewport and selection kept consistent.
//!
//! Widgets translate input into [`Action`]s (or call the methods directly)
//! and then paint from [`ListView::visible_rows`]. Nothing is pushed back to
//! the widget; painting is pull-based.
//!
//! # Example
//!
//! ```
//! use listview::{Action, Group, ListConfig, ListView};
//!
//! let mut view = ListView::with_groups(
//!     ListConfig::new().visible(3).multiple(),
//!     vec![
//!         Group::new("Running", vec!["api".to_string(), "worker".to_string()]),
//!         Group::new("Stopped", vec!["cron".to_string()]),
//!     ],
//! );
//!
//! view.apply(Action::MoveDown);
//! view.apply(Action::ToggleSelection);
//! assert!(view.is_selected("api"));
//!
//! view.set_query("cron");
//! assert_eq!(view.len(), 2);
//! assert!(view.is_selected("api"));
//! ```

mod action;
mod state;

pub use action::Action;
pub use state::{ListView, Row};
