use crate::geometry::{OverlayRect, Rect};
use crate::square_id::SquareId;


// Visual properties of the overlay. Positioning (absolute, no pointer events) is not
// configurable: the overlay must never intercept clicks meant for the board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OverlayStyle {
    pub background_color: String,
}

// The document a highlight is drawn into. Implementations own the naming details (which selector
// finds a square, which class marks it, which id tags the overlay), so that the highlighting
// logic only deals with squares and rectangles.
pub trait HighlightTarget {
    // Handle to a square element.
    type Square;
    // Failure of the underlying document. Not used for squares that are missing.
    type Error;

    fn find_square(&self, id: &SquareId) -> Option<Self::Square>;
    fn square_rect(&self, square: &Self::Square) -> Rect;

    fn add_marker(&mut self, square: &Self::Square) -> Result<(), Self::Error>;
    // Removes the marker from every element carrying it, not only from squares marked by us.
    // Returns the number of elements that had it.
    fn remove_all_markers(&mut self) -> Result<usize, Self::Error>;
    fn has_markers(&self) -> bool;

    fn mount_overlay(&mut self, rect: OverlayRect, style: &OverlayStyle) -> Result<(), Self::Error>;
    // Returns whether there was an overlay to remove.
    fn unmount_overlay(&mut self) -> Result<bool, Self::Error>;
    fn has_overlay(&self) -> bool;
}
