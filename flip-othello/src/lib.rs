//! `flip-othello` is the rules engine for an 8x8 disc-flipping game.
//!
//! The crate is layered leaf-first:
//!
//!  - [`geometry`] maps a [`Coord`] to its neighbors and to the eight rays
//!    running from it to the board edge.
//!  - [`Board`] owns the grid and the active player, and answers the
//!    read-only questions (is a cell empty, can a player move there).
//!  - [`capture`] decides which cells along those rays get flipped.
//!  - [`Game`] is the turn controller: validate, place, flip, hand over.
//!
//! Nothing here reads input or prints. Front-ends take a [`Snapshot`] and
//! render it however they like.

pub mod capture;
pub mod geometry;
pub mod test_utils;

mod board;
mod game;

pub use board::*;
pub use capture::CaptureRule;
pub use game::*;
pub use geometry::{Coord, Direction, ParseCoordError};

/// The number of cells on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on the board.
pub const NUM_SPACES: usize = 64;
