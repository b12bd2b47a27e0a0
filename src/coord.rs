use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::SquareParseError;


pub const NUM_ROWS: u8 = 8;
pub const NUM_COLS: u8 = 8;


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Row {
    idx: u8,  // 0-based
}

impl Row {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_ROWS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Result<Self, SquareParseError> {
        match ch {
            '1'..='8' => Ok(Self::from_zero_based(ch as u8 - b'1')),
            _ => Err(SquareParseError::InvalidRank(ch)),
        }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_one_based(self) -> u8 { self.idx + 1 }
    pub const fn to_algebraic(self) -> char { (self.idx + b'1') as char }
    pub const fn mirrored(self) -> Self { Self::from_zero_based(NUM_ROWS - self.idx - 1) }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_ROWS).map(Self::from_zero_based) }
}


#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Col {
    idx: u8,  // 0-based
}

impl Col {
    pub const fn from_zero_based(idx: u8) -> Self {
        assert!(idx < NUM_COLS);
        Self { idx }
    }
    pub fn from_algebraic(ch: char) -> Result<Self, SquareParseError> {
        match ch {
            'a'..='h' => Ok(Self::from_zero_based(ch as u8 - b'a')),
            _ => Err(SquareParseError::InvalidFile(ch)),
        }
    }
    pub const fn to_zero_based(self) -> u8 { self.idx }
    pub const fn to_one_based(self) -> u8 { self.idx + 1 }
    pub const fn to_algebraic(self) -> char { (self.idx + b'a') as char }
    pub const fn mirrored(self) -> Self { Self::from_zero_based(NUM_COLS - self.idx - 1) }
    pub fn all() -> impl Iterator<Item = Self> + Clone { (0..NUM_COLS).map(Self::from_zero_based) }
}


// Which side of the board is at the bottom of the screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardOrientation {
    #[default]
    Normal,   // white at the bottom
    Rotated,  // black at the bottom
}

impl BoardOrientation {
    pub fn from_flipped(flipped: bool) -> Self {
        if flipped { Self::Rotated } else { Self::Normal }
    }
}


#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: Row,
    pub col: Col,
}

impl Square {
    pub const fn new(row: Row, col: Col) -> Self { Self { row, col } }

    pub fn from_algebraic(s: &str) -> Result<Self, SquareParseError> {
        let (file, rank) = s
            .chars()
            .collect_tuple()
            .ok_or_else(|| SquareParseError::WrongLength(s.to_owned()))?;
        Ok(Square {
            row: Row::from_algebraic(rank)?,
            col: Col::from_algebraic(file)?,
        })
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }

    // The square that occupies the same place on screen when the board is drawn in the given
    // orientation. A rotated board is turned by 180 degrees, so both axes are mirrored.
    pub fn oriented(self, orientation: BoardOrientation) -> Self {
        match orientation {
            BoardOrientation::Normal => self,
            BoardOrientation::Rotated => Square {
                row: self.row.mirrored(),
                col: self.col.mirrored(),
            },
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        Row::all().cartesian_product(Col::all()).map(|(row, col)| Square { row, col })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}{})", self.col.to_algebraic(), self.row.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col.to_algebraic(), self.row.to_algebraic())
    }
}
