//! [`Connector`] that replays canned input and records what it was shown.

use super::{Connector, Input};
use crate::session::SessionError;
use flip_othello::{ParseCoordError, Snapshot};
use std::collections::VecDeque;

#[derive(Clone, Debug, Default)]
pub struct ScriptedConnector {
    lines: VecDeque<String>,
    pub shown: Vec<Snapshot>,
    pub rejected: Vec<ParseCoordError>,
    pub said_farewell: bool,
}

impl ScriptedConnector {
    /// Replay `lines` in order; once they run out, the player aborts.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Connector for ScriptedConnector {
    fn show(&mut self, snapshot: &Snapshot) -> Result<(), SessionError> {
        self.shown.push(*snapshot);
        Ok(())
    }

    fn read_move(&mut self) -> Result<Input, SessionError> {
        Ok(match self.lines.pop_front() {
            Some(line) => Input::from_line(&line),
            None => Input::Abort,
        })
    }

    fn reject(&mut self, err: &ParseCoordError) -> Result<(), SessionError> {
        self.rejected.push(err.clone());
        Ok(())
    }

    fn farewell(&mut self) -> Result<(), SessionError> {
        self.said_farewell = true;
        Ok(())
    }
}
