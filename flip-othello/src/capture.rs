//! Capture resolution: which cells a move flips.
//!
//! Each ray from the played cell is cut down to its bounded run, the cells
//! between the origin and the furthest cell of the mover's color reached
//! before an empty cell. A [`CaptureRule`] then decides how the eight runs
//! combine.

use crate::board::{Board, Cell};
use crate::game::Player;
use crate::geometry::{self, Coord, Direction};
use serde::{Deserialize, Serialize};

/// How the bounded runs of the eight rays combine into one set of flips.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaptureRule {
    /// Flip only the single longest run. Ties go to the earliest direction
    /// in [`Direction::ALL`].
    #[default]
    LongestRun,
    /// Flip every run, as in the usual tournament rules.
    AllDirections,
}

/// The bounded run along `ray`, origin excluded and anchor excluded.
///
/// Scanning stops at the first empty cell. If no cell of `mover`'s color is
/// reached before that, or before the edge, the run is empty.
pub fn bounded_run<'a>(board: &Board, ray: &'a [Coord], mover: Player) -> &'a [Coord] {
    let own = Cell::from(mover);
    let mut anchor = 0;

    for (index, &pos) in ray.iter().enumerate().skip(1) {
        match board.cell(pos) {
            Cell::Empty => break,
            cell if cell == own => anchor = index,
            _ => {}
        }
    }

    if anchor > 1 {
        &ray[1..anchor]
    } else {
        &[]
    }
}

/// The cells `mover` flips by playing at `origin`.
///
/// Only reads the board, so it can run before anything is written.
pub fn resolve(board: &Board, origin: Coord, mover: Player, rule: CaptureRule) -> Vec<Coord> {
    let rays = Direction::ALL.map(|direction| geometry::ray(origin, direction));
    let runs = rays.iter().map(|ray| bounded_run(board, ray, mover));

    match rule {
        CaptureRule::LongestRun => runs
            .fold(&[][..], |best, run| if run.len() > best.len() { run } else { best })
            .to_vec(),
        CaptureRule::AllDirections => runs.flatten().copied().collect(),
    }
}
