//! Controller configuration
//!
//! Defaults match the page markup the controller was written for:
//! a `#explorer` container and the `checked` marker class.

use crate::error::{Result, TabSelectionError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTAINER_ID: &str = "explorer";
pub const DEFAULT_MARKER_CLASS: &str = "checked";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabSelectionConfig {
    /// HTML id of the element grouping all tab inputs
    pub container_id: String,
    /// CSS class put on the tab node of the selected input
    pub marker_class: String,
    /// Tab to mark right after attach. `None` leaves the markup as rendered.
    pub initial_selection: Option<usize>,
}

impl Default for TabSelectionConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            initial_selection: None,
        }
    }
}

impl TabSelectionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// `DOMTokenList.add` throws on empty tokens and tokens with whitespace,
    /// so reject those before touching the document.
    pub fn validate(&self) -> Result<()> {
        if self.container_id.trim().is_empty() {
            return Err(TabSelectionError::InvalidConfig(
                "container id must not be empty".to_string(),
            ));
        }
        if self.marker_class.is_empty() {
            return Err(TabSelectionError::InvalidConfig(
                "marker class must not be empty".to_string(),
            ));
        }
        if self.marker_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(TabSelectionError::InvalidConfig(format!(
                "marker class `{}` contains whitespace",
                self.marker_class
            )));
        }
        Ok(())
    }
}
