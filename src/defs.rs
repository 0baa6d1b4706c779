use std::{fmt, str::FromStr};

use crate::error::ParseError;

/// The fixed dimensions of the board.
pub struct Nums;

impl Nums {
    /// The number of rows.
    pub const ROWS: usize = 8;
    /// The number of columns.
    pub const COLS: usize = 8;
    /// The number of squares.
    pub const SQUARES: usize = Self::ROWS * Self::COLS;
}

/// A square on the board.
///
/// Row 0 is the top row (rank 8) and column 0 is the leftmost column (file
/// A). Both coordinates are always within `0..8`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Square {
    /// The row, 0 at the top.
    row: u8,
    /// The column, 0 on the left.
    col: u8,
}

impl fmt::Display for Square {
    /// Writes the square as its algebraic label: the file letter followed
    /// by the rank digit, e.g. `G2` for row 6, column 6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'A' + self.col);
        let rank = Nums::ROWS as u8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Parses an algebraic label like `G2` back into a [`Square`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(ParseError::MissingToken)?;
        let rank = chars.next().ok_or(ParseError::MissingToken)?;
        if chars.next().is_some() {
            return Err(ParseError::InvalidToken);
        }

        let col = u32::from(file).wrapping_sub(u32::from('A'));
        let rank = rank.to_digit(10).ok_or(ParseError::InvalidToken)?;
        if col >= Nums::COLS as u32 || !(1..=Nums::ROWS as u32).contains(&rank) {
            return Err(ParseError::OutOfBounds);
        }

        Ok(Self::new((Nums::ROWS as u32 - rank) as u8, col as u8))
    }
}

impl Square {
    /// Creates a [`Square`] from a row and a column.
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(
            row < Nums::ROWS as u8 && col < Nums::COLS as u8,
            "coordinates off the board"
        );
        Self { row, col }
    }

    /// The row of the square, 0 at the top.
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The column of the square, 0 on the left.
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Whether the square is a dark square of the checkerboard. Used only
    /// for drawing.
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}
