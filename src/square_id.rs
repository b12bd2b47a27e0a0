use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{BoardOrientation, Square};


// Opaque label that selects exactly one square element of the board. What it looks like is up to
// the page hosting the board, e.g. "e2" or "52".
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SquareId(String);

impl SquareId {
    pub fn new(id: impl Into<String>) -> Self { SquareId(id.into()) }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for SquareId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl From<&str> for SquareId {
    fn from(id: &str) -> Self { SquareId::new(id) }
}


// How a board square is turned into the identifier used by the page.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SquareNaming {
    // "e2". Algebraic names follow the piece, so orientation does not matter.
    #[default]
    Algebraic,
    // "52": one-based file number, then one-based rank number, counted in screen space. On a
    // rotated board both numbers are mirrored.
    Numeric,
}

impl SquareNaming {
    pub fn square_id(self, square: Square, orientation: BoardOrientation) -> SquareId {
        match self {
            SquareNaming::Algebraic => SquareId(square.to_algebraic()),
            SquareNaming::Numeric => {
                let square = square.oriented(orientation);
                SquareId(format!("{}{}", square.col.to_one_based(), square.row.to_one_based()))
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square { Square::from_algebraic(s).unwrap() }

    #[test]
    fn algebraic_naming_ignores_orientation() {
        let naming = SquareNaming::Algebraic;
        assert_eq!(naming.square_id(sq("e2"), BoardOrientation::Normal).as_str(), "e2");
        assert_eq!(naming.square_id(sq("e2"), BoardOrientation::Rotated).as_str(), "e2");
    }

    #[test]
    fn numeric_naming() {
        let naming = SquareNaming::Numeric;
        assert_eq!(naming.square_id(sq("e2"), BoardOrientation::Normal).as_str(), "52");
        assert_eq!(naming.square_id(sq("a1"), BoardOrientation::Normal).as_str(), "11");
        assert_eq!(naming.square_id(sq("h8"), BoardOrientation::Normal).as_str(), "88");
        assert_eq!(naming.square_id(sq("e2"), BoardOrientation::Rotated).as_str(), "47");
        assert_eq!(naming.square_id(sq("a1"), BoardOrientation::Rotated).as_str(), "88");
    }
}
