use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::square_id::SquareNaming;


// Where the board lives on the page and what the highlight looks like. Every field is optional
// in JSON; missing fields keep their defaults.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
    // CSS selector of the element containing the squares.
    pub board_selector: String,
    // Square elements carry class `{square_class_prefix}{square_id}`.
    pub square_class_prefix: String,
    // Class added to squares in outline mode. Styling is up to the page stylesheet.
    pub marker_class: String,
    // Element id reserved for the overlay. Must not be used by anything else on the page.
    pub overlay_id: String,
    // Any CSS color; should be translucent so the pieces stay visible.
    pub overlay_color: String,
    pub square_naming: SquareNaming,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        HighlightConfig {
            board_selector: "wc-chess-board".to_owned(),
            square_class_prefix: "square-".to_owned(),
            marker_class: "highlight".to_owned(),
            overlay_id: "suggestion-overlay".to_owned(),
            overlay_color: "rgba(255, 255, 0, 0.5)".to_owned(),
            square_naming: SquareNaming::Algebraic,
        }
    }
}

impl HighlightConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: HighlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty marker would make `clear` match nothing, and an empty id cannot be looked up.
        if self.marker_class.trim().is_empty() {
            return Err(ConfigError::EmptyField("marker_class"));
        }
        if self.overlay_id.trim().is_empty() {
            return Err(ConfigError::EmptyField("overlay_id"));
        }
        Ok(())
    }
}
