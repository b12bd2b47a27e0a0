// Drawing and removing a move suggestion.
//
// A suggestion is shown either by adding the marker class to the origin and destination squares
// ([`DisplayMode::Outline`]) or by placing a single translucent rectangle over them
// ([`DisplayMode::Overlay`]). At most one of the two is present at any time: every render starts
// by clearing, and clearing removes both kinds regardless of which one is on screen.
//
// Nothing is cached. Whether a highlight is shown is always read back from the target, so the
// state stays correct even if the page is changed behind our back.

use itertools::Itertools;
use log::{debug, info};

use crate::config::HighlightConfig;
use crate::coord::BoardOrientation;
use crate::display_mode::DisplayMode;
use crate::geometry::{OverlayRect, overlay_rect};
use crate::square_id::{SquareId, SquareNaming};
use crate::suggestion::MoveSuggestion;
use crate::target::{HighlightTarget, OverlayStyle};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HighlightState {
    Cleared,
    Highlighted,
}

#[derive(Clone, Debug)]
pub enum SquareLookup<S> {
    Found { origin: S, destination: S },
    NotFound { missing: Vec<SquareId> },
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RenderOutcome {
    Outlined,
    Overlaid(OverlayRect),
    // Not an error: the board may not be on the page yet, or the page may use other square names.
    SquaresNotFound,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClearOutcome {
    pub overlay_removed: bool,
    pub markers_removed: usize,
}

pub struct Highlighter<T: HighlightTarget> {
    target: T,
    overlay_style: OverlayStyle,
    square_naming: SquareNaming,
}

impl<T: HighlightTarget> Highlighter<T> {
    pub fn new(target: T, config: &HighlightConfig) -> Self {
        Highlighter {
            target,
            overlay_style: OverlayStyle {
                background_color: config.overlay_color.clone(),
            },
            square_naming: config.square_naming,
        }
    }

    pub fn target(&self) -> &T { &self.target }
    pub fn into_target(self) -> T { self.target }

    pub fn state(&self) -> HighlightState {
        if self.target.has_overlay() || self.target.has_markers() {
            HighlightState::Highlighted
        } else {
            HighlightState::Cleared
        }
    }

    pub fn lookup(&self, origin: &SquareId, destination: &SquareId) -> SquareLookup<T::Square> {
        let origin_square = self.target.find_square(origin);
        let destination_square = self.target.find_square(destination);
        match (origin_square, destination_square) {
            (Some(origin), Some(destination)) => SquareLookup::Found { origin, destination },
            (origin_square, destination_square) => {
                let mut missing = vec![];
                if origin_square.is_none() {
                    missing.push(origin.clone());
                }
                if destination_square.is_none() {
                    missing.push(destination.clone());
                }
                SquareLookup::NotFound { missing }
            }
        }
    }

    pub fn render(
        &mut self, origin: &SquareId, destination: &SquareId, mode: DisplayMode,
    ) -> Result<RenderOutcome, T::Error> {
        debug!("Rendering suggestion {origin} -> {destination} as {}", mode.name());
        self.clear()?;
        let (origin_square, destination_square) = match self.lookup(origin, destination) {
            SquareLookup::Found { origin, destination } => (origin, destination),
            SquareLookup::NotFound { missing } => {
                debug!("Squares not found: {}", missing.iter().join(", "));
                return Ok(RenderOutcome::SquaresNotFound);
            }
        };
        match mode {
            DisplayMode::Overlay => {
                let rect = overlay_rect(
                    self.target.square_rect(&origin_square),
                    self.target.square_rect(&destination_square),
                );
                self.target.mount_overlay(rect, &self.overlay_style)?;
                debug!("Overlay mounted at {rect:?}");
                Ok(RenderOutcome::Overlaid(rect))
            }
            DisplayMode::Outline => {
                self.target.add_marker(&origin_square)?;
                self.target.add_marker(&destination_square)?;
                debug!("Marked {origin} and {destination}");
                Ok(RenderOutcome::Outlined)
            }
        }
    }

    pub fn render_move(
        &mut self, suggestion: MoveSuggestion, orientation: BoardOrientation, mode: DisplayMode,
    ) -> Result<RenderOutcome, T::Error> {
        info!("Suggesting {suggestion}");
        let origin = self.square_naming.square_id(suggestion.from, orientation);
        let destination = self.square_naming.square_id(suggestion.to, orientation);
        self.render(&origin, &destination, mode)
    }

    pub fn clear(&mut self) -> Result<ClearOutcome, T::Error> {
        let overlay_removed = self.target.unmount_overlay()?;
        let markers_removed = self.target.remove_all_markers()?;
        if overlay_removed {
            debug!("Overlay removed");
        }
        if markers_removed > 0 {
            debug!("Marker removed from {markers_removed} element(s)");
        }
        Ok(ClearOutcome { overlay_removed, markers_removed })
    }
}
