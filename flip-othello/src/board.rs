//! The 8x8 grid, the active player, and the read-only move checks.

use crate::game::Player;
use crate::geometry::{self, Coord};
use crate::EDGE_LENGTH;
use derive_more::{Display, Error};

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Cells laid out as `grid[row][col]`, zero-based.
pub type Grid = [[Cell; EDGE_LENGTH]; EDGE_LENGTH];

/// Why a requested move was refused. None of these change the board.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Display, Error)]
pub enum MoveError {
    #[display("({row}, {col}) is off the board")]
    OffBoard { row: i32, col: i32 },
    #[display("{_0} is already occupied")]
    Occupied(#[error(not(source))] Coord),
    #[display("{_0} has no occupied neighbor")]
    Isolated(#[error(not(source))] Coord),
}

/// The complete game position: every cell plus whose turn it is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    cells: Grid,
    active: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting layout with Black to move.
    pub fn new() -> Self {
        Self::with_first_player(Player::default())
    }

    /// The starting layout with `player` to move.
    pub fn with_first_player(player: Player) -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;

        Self {
            cells,
            active: player,
        }
    }

    /// Build an arbitrary position.
    pub fn from_cells(cells: Grid, active: Player) -> Self {
        Self { cells, active }
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    pub fn cell(&self, pos: Coord) -> Cell {
        let (row, col) = pos.index();
        self.cells[row][col]
    }

    #[inline]
    pub fn is_empty(&self, pos: Coord) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// A cell can be played if it is empty and touches at least one
    /// occupied cell. Whether the move would capture anything is not checked.
    pub fn can_play_at(&self, pos: Coord) -> bool {
        self.is_empty(pos)
            && geometry::neighbors(pos)
                .into_iter()
                .any(|n| !self.is_empty(n))
    }

    /// Validate raw coordinates against the board, explaining any refusal.
    pub fn check_move(&self, row: i32, col: i32) -> Result<Coord, MoveError> {
        let pos = Coord::new(row, col).ok_or(MoveError::OffBoard { row, col })?;

        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        if !self.can_play_at(pos) {
            return Err(MoveError::Isolated(pos));
        }

        Ok(pos)
    }

    /// Every coordinate the active player could play right now.
    pub fn playable(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&pos| self.can_play_at(pos))
    }

    /// Count the cells in a given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Count the non-empty cells.
    pub fn occupied(&self) -> usize {
        crate::NUM_SPACES - self.count(Cell::Empty)
    }

    /// A read-only copy of the position for front-ends.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells,
            active: self.active,
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Coord, cell: Cell) {
        let (row, col) = pos.index();
        self.cells[row][col] = cell;
    }

    /// Hand the turn to the other player.
    // Score bookkeeping would hook in here; none is kept.
    #[inline]
    pub(crate) fn flip_player(&mut self) {
        self.active = !self.active;
    }
}

/// What a renderer needs to draw the board: the cells, their axis labels,
/// and the player to move.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    pub cells: Grid,
    pub active: Player,
}

impl Snapshot {
    /// Labels along the left edge, top to bottom.
    pub const ROW_LABELS: [char; EDGE_LENGTH] = ['1', '2', '3', '4', '5', '6', '7', '8'];

    /// Labels along the top edge, left to right.
    pub const COL_LABELS: [char; EDGE_LENGTH] = ['1', '2', '3', '4', '5', '6', '7', '8'];

    /// Rows paired with their labels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (char, &[Cell; EDGE_LENGTH])> {
        Self::ROW_LABELS.into_iter().zip(self.cells.iter())
    }

    #[inline]
    pub fn cell(&self, pos: Coord) -> Cell {
        let (row, col) = pos.index();
        self.cells[row][col]
    }
}
