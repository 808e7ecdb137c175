//! Coordinates on the board, and the neighbors and rays around them.
//!
//! Coordinates are 1-indexed: `(1, 1)` is the upper-left cell and `(8, 8)`
//! the lower-right. A [`Coord`] can only hold an on-board position, so
//! nothing downstream needs to bounds-check again.

use crate::EDGE_LENGTH;
use arrayvec::ArrayVec;
use derive_more::{Display, Error, Into};
use itertools::iproduct;
use std::fmt::{self, Formatter};
use std::str::FromStr;

const EDGE: i32 = EDGE_LENGTH as i32;

/// Returns whether `(row, col)` lies on the board.
#[inline]
pub fn within_board(row: i32, col: i32) -> bool {
    (1..=EDGE).contains(&row) && (1..=EDGE).contains(&col)
}

/// A cell position on the board, guaranteed to be in `1..=8` on both axes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build a coordinate, or `None` if it would fall off the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if within_board(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// The coordinate one step of `(d_row, d_col)` away, if still on the board.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Zero-based `(row, col)` for indexing the grid.
    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        (self.row as usize - 1, self.col as usize - 1)
    }

    /// All 64 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        iproduct!(1..=EDGE_LENGTH as u8, 1..=EDGE_LENGTH as u8)
            .map(|(row, col)| Coord { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Why a piece of text could not be read as a coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseCoordError {
    #[display("expected a move as r, c")]
    WrongArity,
    #[display("{_0:?} is not a number")]
    NotANumber(#[error(not(source))] String),
    #[display("({row}, {col}) is off the board")]
    OutOfRange { row: i64, col: i64 },
}

/// Read a coordinate from `"r, c"` notation. Whitespace around either
/// number is ignored.
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => (row.trim(), col.trim()),
            _ => return Err(ParseCoordError::WrongArity),
        };

        let number = |part: &str| {
            part.parse::<i64>()
                .map_err(|_| ParseCoordError::NotANumber(part.to_string()))
        };
        let (row, col) = (number(row)?, number(col)?);

        i32::try_from(row)
            .ok()
            .zip(i32::try_from(col).ok())
            .and_then(|(r, c)| Coord::new(r, c))
            .ok_or(ParseCoordError::OutOfRange { row, col })
    }
}

/// Coordinates adjacent to `pos`, including diagonals, in row-major order.
/// Corners have 3, edges 5, and interior cells 8.
pub fn neighbors(pos: Coord) -> ArrayVec<Coord, 8> {
    iproduct!(-1..=1, -1..=1)
        .filter(|&step| step != (0, 0))
        .filter_map(|(d_row, d_col)| pos.offset(d_row, d_col))
        .collect()
}

/// One of the eight straight lines leaving a cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Display)]
pub enum Direction {
    LeftRow,
    RightRow,
    UpperColumn,
    LowerColumn,
    UpperSlash,
    LowerSlash,
    UpperBackslash,
    LowerBackslash,
}

impl Direction {
    /// Every direction, in the order captures are compared.
    pub const ALL: [Direction; 8] = [
        Direction::LeftRow,
        Direction::RightRow,
        Direction::UpperColumn,
        Direction::LowerColumn,
        Direction::UpperSlash,
        Direction::LowerSlash,
        Direction::UpperBackslash,
        Direction::LowerBackslash,
    ];

    /// The `(row, col)` step taken per cell.
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::LeftRow => (0, -1),
            Direction::RightRow => (0, 1),
            Direction::UpperColumn => (-1, 0),
            Direction::LowerColumn => (1, 0),
            Direction::UpperSlash => (1, -1),
            Direction::LowerSlash => (-1, 1),
            Direction::UpperBackslash => (-1, -1),
            Direction::LowerBackslash => (1, 1),
        }
    }
}

/// Coordinates from an origin to the board edge. The origin is always the
/// first element, so a ray is never empty.
pub type Ray = ArrayVec<Coord, EDGE_LENGTH>;

/// Walk from `origin` towards the edge in `direction`.
pub fn ray(origin: Coord, direction: Direction) -> Ray {
    let (d_row, d_col) = direction.step();
    let mut cells = Ray::new();
    let mut next = Some(origin);

    while let Some(pos) = next {
        cells.push(pos);
        next = pos.offset(d_row, d_col);
    }

    cells
}

#[inline]
pub fn left_row(origin: Coord) -> Ray {
    ray(origin, Direction::LeftRow)
}

#[inline]
pub fn right_row(origin: Coord) -> Ray {
    ray(origin, Direction::RightRow)
}

#[inline]
pub fn upper_column(origin: Coord) -> Ray {
    ray(origin, Direction::UpperColumn)
}

#[inline]
pub fn lower_column(origin: Coord) -> Ray {
    ray(origin, Direction::LowerColumn)
}

/// Down and to the left.
#[inline]
pub fn upper_slash(origin: Coord) -> Ray {
    ray(origin, Direction::UpperSlash)
}

/// Up and to the right.
#[inline]
pub fn lower_slash(origin: Coord) -> Ray {
    ray(origin, Direction::LowerSlash)
}

/// Up and to the left.
#[inline]
pub fn upper_backslash(origin: Coord) -> Ray {
    ray(origin, Direction::UpperBackslash)
}

/// Down and to the right.
#[inline]
pub fn lower_backslash(origin: Coord) -> Ray {
    ray(origin, Direction::LowerBackslash)
}
