//! The turn controller.
//!
//! [`Game`] is the only way to change a [`Board`]: it validates a move,
//! works out the flips, writes them, and passes the turn.

use crate::board::{Board, MoveError, Snapshot};
use crate::capture::{self, CaptureRule};
use crate::geometry::Coord;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    #[default]
    #[display("B")]
    Black,
    #[display("W")]
    White,
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// What a single applied move did.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Turn {
    pub player: Player,
    pub placed: Coord,
    pub flipped: Vec<Coord>,
}

/// A game in progress: the board plus the rule used to resolve captures.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Game {
    board: Board,
    rule: CaptureRule,
    moves_played: u32,
}

impl Game {
    pub fn new(rule: CaptureRule) -> Self {
        Self::from_board(Board::new(), rule)
    }

    /// Continue from an existing position.
    pub fn from_board(board: Board, rule: CaptureRule) -> Self {
        Self {
            board,
            rule,
            moves_played: 0,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rule(&self) -> CaptureRule {
        self.rule
    }

    #[inline]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    #[inline]
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// Validate raw coordinates, then apply the move. A refused move leaves
    /// the game untouched.
    pub fn play(&mut self, row: i32, col: i32) -> Result<Turn, MoveError> {
        let pos = self.board.check_move(row, col)?;
        Ok(self.apply_move(pos))
    }

    /// Place the active player's disc at `pos`, flip the captured run and
    /// pass the turn. `pos` must already have passed [`Board::can_play_at`].
    pub(crate) fn apply_move(&mut self, pos: Coord) -> Turn {
        debug_assert!(self.board.can_play_at(pos), "{} is not playable", pos);
        let player = self.board.active_player();
        let flipped = capture::resolve(&self.board, pos, player, self.rule);

        self.board.set(pos, player.into());
        for &cell in &flipped {
            self.board.set(cell, player.into());
        }
        self.board.flip_player();
        self.moves_played += 1;

        debug!(
            player = %player,
            placed = %pos,
            flipped = flipped.len(),
            next = %self.board.active_player(),
            "applied move"
        );

        Turn {
            player,
            placed: pos,
            flipped,
        }
    }
}
