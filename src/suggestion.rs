use std::fmt;

use crate::coord::Square;
use crate::error::MoveParseError;


// A move proposed for the user to look at. Only the two squares matter for highlighting, so
// promotion piece is validated but not kept.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveSuggestion {
    pub from: Square,
    pub to: Square,
}

impl MoveSuggestion {
    // Parses UCI long algebraic notation, as produced by chess engines: "e2e4", "e7e8q".
    pub fn from_uci(notation: &str) -> Result<Self, MoveParseError> {
        let notation = notation.trim();
        if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
            return Err(MoveParseError::WrongLength(notation.to_owned()));
        }
        let from = Square::from_algebraic(&notation[0..2])?;
        let to = Square::from_algebraic(&notation[2..4])?;
        if let Some(promotion) = notation[4..].chars().next() {
            if !matches!(promotion, 'n' | 'b' | 'r' | 'q') {
                return Err(MoveParseError::InvalidPromotion(promotion));
            }
        }
        Ok(MoveSuggestion { from, to })
    }
}

impl fmt::Display for MoveSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}{}", self.from, self.to) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SquareParseError;

    #[test]
    fn parse_uci() {
        let m = MoveSuggestion::from_uci("e2e4").unwrap();
        assert_eq!(m.from.to_algebraic(), "e2");
        assert_eq!(m.to.to_algebraic(), "e4");
        assert_eq!(m.to_string(), "e2e4");

        let m = MoveSuggestion::from_uci(" e7e8q\n").unwrap();
        assert_eq!(m.to_string(), "e7e8");
    }

    #[test]
    fn reject_malformed_uci() {
        assert_eq!(
            MoveSuggestion::from_uci("e2"),
            Err(MoveParseError::WrongLength("e2".to_owned()))
        );
        assert_eq!(
            MoveSuggestion::from_uci("e2e4qq"),
            Err(MoveParseError::WrongLength("e2e4qq".to_owned()))
        );
        assert_eq!(
            MoveSuggestion::from_uci("e2é4"),
            Err(MoveParseError::WrongLength("e2é4".to_owned()))
        );
        assert_eq!(
            MoveSuggestion::from_uci("e2x4"),
            Err(MoveParseError::InvalidSquare(SquareParseError::InvalidFile('x')))
        );
        assert_eq!(MoveSuggestion::from_uci("e7e8k"), Err(MoveParseError::InvalidPromotion('k')));
    }
}
