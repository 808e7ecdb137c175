//! The session loop: ask for a move, apply it, show the result, repeat
//! until the player aborts.

use crate::connectors::{Connector, Input};
use derive_more::{Display, Error, From};
use flip_othello::{Board, Coord, Game};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// A shared flag asking a session to stop before its next move.
#[derive(Clone, Debug, Default)]
pub struct AbortSignal(Arc<AtomicBool>);

impl AbortSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    #[display("terminal I/O failed: {_0}")]
    Io(io::Error),
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub moves_played: u32,
    pub board: Board,
}

/// One game between a [`Game`] and the [`Connector`] feeding it moves.
pub struct Session<C> {
    game: Game,
    connector: C,
    abort: AbortSignal,
}

impl<C: Connector> Session<C> {
    pub fn new(game: Game, connector: C) -> Self {
        Self {
            game,
            connector,
            abort: AbortSignal::new(),
        }
    }

    /// Stop when `abort` is raised, e.g. from a signal handler.
    pub fn with_abort(mut self, abort: AbortSignal) -> Self {
        self.abort = abort;
        self
    }

    pub fn abort_signal(&self) -> AbortSignal {
        self.abort.clone()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    pub fn into_connector(self) -> C {
        self.connector
    }

    /// Play until the player aborts. Illegal moves are dropped silently
    /// and the player is asked again.
    pub fn run(&mut self) -> Result<Summary, SessionError> {
        info!(
            rule = ?self.game.rule(),
            first = %self.game.board().active_player(),
            "starting session"
        );
        self.connector.show(&self.game.snapshot())?;

        while !self.abort.is_raised() {
            let pos = match self.next_move()? {
                Some(pos) => pos,
                None => break,
            };
            if self.abort.is_raised() {
                break;
            }

            match self.game.play(i32::from(pos.row()), i32::from(pos.col())) {
                Ok(_) => self.connector.show(&self.game.snapshot())?,
                Err(err) => debug!(%err, "illegal move, asking again"),
            }
        }

        info!(moves = self.game.moves_played(), "session aborted");
        self.connector.farewell()?;

        Ok(Summary {
            moves_played: self.game.moves_played(),
            board: *self.game.board(),
        })
    }

    /// Read until the connector yields a well-formed coordinate, or `None`
    /// if the player aborts.
    fn next_move(&mut self) -> Result<Option<Coord>, SessionError> {
        loop {
            match self.connector.read_move()? {
                Input::Parsed(pos) => return Ok(Some(pos)),
                Input::Rejected(err) => {
                    debug!(%err, "rejected input");
                    self.connector.reject(&err)?;
                }
                Input::Abort => {
                    self.abort.raise();
                    return Ok(None);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::ScriptedConnector;
    use flip_othello::{CaptureRule, Cell, Player};

    fn at(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn abort_signal_is_shared() {
        let signal = AbortSignal::new();
        let clone = signal.clone();
        assert!(!signal.is_raised());
        clone.raise();
        assert!(signal.is_raised());
    }

    #[test]
    fn raised_signal_stops_before_any_move() {
        let abort = AbortSignal::new();
        abort.raise();
        let connector = ScriptedConnector::new(["4, 3"]);
        let mut session = Session::new(Game::default(), connector).with_abort(abort);

        let summary = session.run().unwrap();
        assert_eq!(summary.moves_played, 0);
        assert_eq!(summary.board, Board::new());
        assert_eq!(session.connector().remaining(), 1);
        assert!(session.connector().said_farewell);
    }

    #[test]
    fn plays_until_input_runs_out() {
        let connector = ScriptedConnector::new(["4, 3", "3, 3"]);
        let mut session = Session::new(Game::new(CaptureRule::LongestRun), connector);

        let summary = session.run().unwrap();
        assert_eq!(summary.moves_played, 2);
        assert_eq!(summary.board.cell(at(4, 3)), Cell::Black);
        assert_eq!(summary.board.cell(at(3, 3)), Cell::White);
        assert_eq!(summary.board.active_player(), Player::Black);
        assert!(session.abort_signal().is_raised());

        // Initial board, then one per move.
        assert_eq!(session.connector().shown.len(), 3);
    }
}
