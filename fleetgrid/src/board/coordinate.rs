//! Cell coordinates and their two-character text form, e.g. `A0` or `j9`.
use std::{fmt, str::FromStr};

use crate::board::{ParseCoordinateError, GRID_SIZE};

/// The coordinates of a cell in the board. Rows are written as letters starting at `A`,
/// columns as digits starting at `0`.
///
/// A [`Coordinate`] is always in bounds for the 10x10 grid, so grids can be indexed by
/// it without checking.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Vertical position of the cell.
    row: usize,
    /// Horizontal position of the cell.
    col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    /// Panics if either is outside the grid.
    pub fn new(row: usize, col: usize) -> Self {
        match Self::try_new(row, col) {
            Some(coord) => coord,
            None => panic!(
                "({}, {}) is out of bounds for a {}x{} grid",
                row, col, GRID_SIZE, GRID_SIZE
            ),
        }
    }

    /// Construct a [`Coordinate`] from the given `row` and `col`, returning `None` if
    /// either is outside the grid.
    pub fn try_new(row: usize, col: usize) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// The row of this coordinate, `0` being row `A`.
    pub fn row(self) -> usize {
        self.row
    }

    /// The column of this coordinate.
    pub fn col(self) -> usize {
        self.col
    }

    /// The display letter of this coordinate's row.
    pub fn row_letter(self) -> char {
        (b'A' + self.row as u8) as char
    }

    /// Get an iterator over every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..GRID_SIZE * GRID_SIZE).map(Self::un_linearize)
    }

    /// Returns true if `text` would parse as a [`Coordinate`]. Lets an input loop
    /// filter bad text before converting it.
    pub fn is_valid(text: &str) -> bool {
        text.parse::<Self>().is_ok()
    }

    /// Convert this coordinate to an index into row-major grid storage.
    pub(crate) fn linearize(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Convert a row-major index back into a [`Coordinate`]. Panics if the index is past
    /// the end of the grid.
    pub(crate) fn un_linearize(idx: usize) -> Self {
        Self::new(idx / GRID_SIZE, idx % GRID_SIZE)
    }
}

/// Get the display letter for the given row index, or `None` if the row is off the grid.
pub fn row_letter(row: usize) -> Option<char> {
    if row < GRID_SIZE {
        Some((b'A' + row as u8) as char)
    } else {
        None
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse a coordinate from its letter-digit form. The letter is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (letter, digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(letter), Some(digit), None) => (letter, digit),
            _ => return Err(ParseCoordinateError::WrongLength(s.chars().count())),
        };
        let upper = letter.to_ascii_uppercase();
        let row = if upper.is_ascii_uppercase() {
            (upper as u8 - b'A') as usize
        } else {
            usize::max_value()
        };
        if row >= GRID_SIZE {
            return Err(ParseCoordinateError::InvalidRow(letter));
        }
        let col = digit
            .to_digit(10)
            .map(|col| col as usize)
            .filter(|&col| col < GRID_SIZE)
            .ok_or(ParseCoordinateError::InvalidColumn(digit))?;
        Ok(Self { row, col })
    }
}

impl fmt::Display for Coordinate {
    /// Writes the canonical upper-case form, which parses back to the same coordinate.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&format!("{}{}", self.row_letter(), self.col))
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}
