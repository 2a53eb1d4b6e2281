//! List configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::SelectionMode;
use crate::viewport::DEFAULT_VISIBLE;

/// Configuration for a [`ListView`](crate::ListView).
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Number of rows in the viewport.
    pub visible: usize,

    /// Match the filter query case-sensitively.
    pub case_sensitive: bool,

    /// Single or multiple selection.
    pub selection_mode: SelectionMode,

    /// Hide groups without matches while a filter is active.
    pub hide_empty_groups: bool,

    /// Initial expansion of groups created through the list view.
    pub expanded_by_default: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            visible: DEFAULT_VISIBLE,
            case_sensitive: false,
            selection_mode: SelectionMode::Single,
            hide_empty_groups: true,
            expanded_by_default: true,
        }
    }
}

impl ListConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a usable list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.visible == 0 {
            return Err(ConfigError::ZeroVisible);
        }
        Ok(())
    }

    /// Set the viewport height.
    pub fn visible(mut self, visible: usize) -> Self {
        self.visible = visible;
        self
    }

    /// Match the filter case-sensitively.
    pub fn case_sensitive(mut self) -> Self {
        self.case_sensitive = true;
        self
    }

    /// Set the selection mode.
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Allow multiple selection.
    pub fn multiple(mut self) -> Self {
        self.selection_mode = SelectionMode::Multiple;
        self
    }

    /// Keep groups without matches visible while filtering.
    pub fn show_empty_groups(mut self) -> Self {
        self.hide_empty_groups = false;
        self
    }

    /// Create groups collapsed.
    pub fn collapsed_by_default(mut self) -> Self {
        self.expanded_by_default = false;
        self
    }
}

/// Errors produced while loading a [`ListConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("Invalid list config: {0}")]
    Json(#[from] serde_json::Error),

    /// The viewport must show at least one row.
    #[error("Viewport must show at least one row")]
    ZeroVisible,

    /// The selection mode string is not recognised.
    #[error("Unknown selection mode '{0}' (expected 'single' or 'multiple')")]
    UnknownSelectionMode(String),
}
