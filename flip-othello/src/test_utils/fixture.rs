//! Text fixtures for board positions.
//!
//! A fixture is eight rows of eight characters, top row first:
//! `.` for empty, `B` for black and `W` for white.

use crate::board::{Board, Cell, Grid};
use crate::game::Player;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display("row {row} has {len} cells")]
    BadRowLength { row: usize, len: usize },
    #[display("unknown cell {symbol:?} in row {row}")]
    UnknownCell { row: usize, symbol: char },
}

/// Build a [`Board`] from eight text rows, with `active` to move.
pub fn board_from_rows(
    rows: [&str; EDGE_LENGTH],
    active: Player,
) -> Result<Board, ParseBoardError> {
    let mut cells: Grid = Default::default();

    for (r, text) in rows.iter().enumerate() {
        let len = text.chars().count();
        if len != EDGE_LENGTH {
            return Err(ParseBoardError::BadRowLength { row: r + 1, len });
        }

        for (c, symbol) in text.chars().enumerate() {
            cells[r][c] = match symbol {
                '.' => Cell::Empty,
                'B' => Cell::Black,
                'W' => Cell::White,
                _ => return Err(ParseBoardError::UnknownCell { row: r + 1, symbol }),
            };
        }
    }

    Ok(Board::from_cells(cells, active))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coord;

    const START: [&str; 8] = [
        "........", "........", "........", "...WB...", "...BW...", "........", "........",
        "........",
    ];

    #[test]
    fn parses_starting_layout() {
        assert_eq!(board_from_rows(START, Player::Black), Ok(Board::new()));
    }

    #[test]
    fn reads_cells_row_major() {
        let mut rows = START;
        rows[0] = "B......W";
        let board = board_from_rows(rows, Player::White).unwrap();
        assert_eq!(board.cell(Coord::new(1, 1).unwrap()), Cell::Black);
        assert_eq!(board.cell(Coord::new(1, 8).unwrap()), Cell::White);
        assert_eq!(board.active_player(), Player::White);
    }

    #[test]
    fn rejects_bad_rows() {
        let mut rows = START;
        rows[2] = ".......";
        assert_eq!(
            board_from_rows(rows, Player::Black),
            Err(ParseBoardError::BadRowLength { row: 3, len: 7 })
        );

        rows[2] = "...x....";
        assert_eq!(
            board_from_rows(rows, Player::Black),
            Err(ParseBoardError::UnknownCell { row: 3, symbol: 'x' })
        );
    }
}
