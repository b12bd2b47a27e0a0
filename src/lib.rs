#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod config;
pub mod coord;
pub mod display_mode;
pub mod error;
pub mod geometry;
pub mod highlight;
pub mod square_id;
pub mod suggestion;
pub mod target;
pub mod test_util;

pub use config::HighlightConfig;
pub use coord::{BoardOrientation, Col, Row, Square};
pub use display_mode::DisplayMode;
pub use error::{ConfigError, MoveParseError, SquareParseError};
pub use geometry::{OverlayRect, Rect};
pub use highlight::{ClearOutcome, HighlightState, Highlighter, RenderOutcome, SquareLookup};
pub use square_id::{SquareId, SquareNaming};
pub use suggestion::MoveSuggestion;
pub use target::{HighlightTarget, OverlayStyle};
