// Test utilities that cannot be moved to the "tests" folder, because unit tests use them too.

use std::collections::BTreeSet;

use crate::config::HighlightConfig;
use crate::geometry::{OverlayRect, Rect};
use crate::square_id::SquareId;
use crate::target::{HighlightTarget, OverlayStyle};


#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FakeTargetError;

#[derive(Clone, Debug)]
pub struct FakeElement {
    pub classes: BTreeSet<String>,
    pub rect: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FakeOverlay {
    pub id: String,
    pub rect: OverlayRect,
    pub style: OverlayStyle,
}

// In-memory stand-in for a page with a board. Elements are addressed by index, mirroring how a
// real document hands out element references.
#[derive(Clone, Debug)]
pub struct FakeTarget {
    square_class_prefix: String,
    marker_class: String,
    overlay_id: String,
    pub elements: Vec<FakeElement>,
    pub overlays: Vec<FakeOverlay>,
    // When set, every mutation fails, as if the document threw.
    pub broken: bool,
}

impl FakeTarget {
    pub fn new(config: &HighlightConfig) -> Self {
        FakeTarget {
            square_class_prefix: config.square_class_prefix.clone(),
            marker_class: config.marker_class.clone(),
            overlay_id: config.overlay_id.clone(),
            elements: vec![],
            overlays: vec![],
            broken: false,
        }
    }

    // Square elements laid out on a regular grid, `size` pixels each, white at the bottom.
    pub fn with_board(config: &HighlightConfig, size: f64) -> Self {
        use crate::coord::{NUM_ROWS, Square};
        let mut target = FakeTarget::new(config);
        for sq in Square::all() {
            let left = f64::from(sq.col.to_zero_based()) * size;
            let top = f64::from(NUM_ROWS - sq.row.to_zero_based() - 1) * size;
            target.add_square(&sq.to_algebraic(), Rect::new(left, top, left + size, top + size));
        }
        target
    }

    pub fn add_square(&mut self, id: &str, rect: Rect) -> usize {
        self.add_element([format!("{}{}", self.square_class_prefix, id)], rect)
    }

    pub fn add_element(&mut self, classes: impl IntoIterator<Item = String>, rect: Rect) -> usize {
        self.elements.push(FakeElement { classes: classes.into_iter().collect(), rect });
        self.elements.len() - 1
    }

    pub fn is_marked(&self, element: usize) -> bool {
        self.elements[element].classes.contains(&self.marker_class)
    }

    pub fn marked_count(&self) -> usize {
        (0..self.elements.len()).filter(|&idx| self.is_marked(idx)).count()
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.iter().filter(|o| o.id == self.overlay_id).count()
    }

    fn check_broken(&self) -> Result<(), FakeTargetError> {
        if self.broken { Err(FakeTargetError) } else { Ok(()) }
    }
}

impl HighlightTarget for FakeTarget {
    type Square = usize;
    type Error = FakeTargetError;

    fn find_square(&self, id: &SquareId) -> Option<usize> {
        let class = format!("{}{}", self.square_class_prefix, id);
        self.elements.iter().position(|e| e.classes.contains(&class))
    }

    fn square_rect(&self, square: &usize) -> Rect { self.elements[*square].rect }

    fn add_marker(&mut self, square: &usize) -> Result<(), FakeTargetError> {
        self.check_broken()?;
        let marker = self.marker_class.clone();
        self.elements[*square].classes.insert(marker);
        Ok(())
    }

    fn remove_all_markers(&mut self) -> Result<usize, FakeTargetError> {
        self.check_broken()?;
        let marker = &self.marker_class;
        let mut removed = 0;
        for element in &mut self.elements {
            if element.classes.remove(marker) {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn has_markers(&self) -> bool { self.marked_count() > 0 }

    fn mount_overlay(&mut self, rect: OverlayRect, style: &OverlayStyle) -> Result<(), FakeTargetError> {
        self.check_broken()?;
        self.overlays.push(FakeOverlay {
            id: self.overlay_id.clone(),
            rect,
            style: style.clone(),
        });
        Ok(())
    }

    fn unmount_overlay(&mut self) -> Result<bool, FakeTargetError> {
        self.check_broken()?;
        // Like `getElementById`, only the first element with the id is found.
        match self.overlays.iter().position(|o| o.id == self.overlay_id) {
            Some(idx) => {
                self.overlays.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn has_overlay(&self) -> bool { self.overlay_count() > 0 }
}
