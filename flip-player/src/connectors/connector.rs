use crate::session::SessionError;
use flip_othello::{Coord, ParseCoordError, Snapshot};

/// One reading from a [`Connector`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Parsed(Coord),
    Rejected(ParseCoordError),
    /// The player wants out. Not an error.
    Abort,
}

impl Input {
    /// Interpret one line of player text.
    pub fn from_line(line: &str) -> Self {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return Input::Abort;
        }

        match line.parse() {
            Ok(pos) => Input::Parsed(pos),
            Err(err) => Input::Rejected(err),
        }
    }
}

/// A player-facing interface to a session: something that can show a
/// position and produce the next move.
pub trait Connector {
    /// Present the current position.
    fn show(&mut self, snapshot: &Snapshot) -> Result<(), SessionError>;

    /// Block until the player produces something.
    fn read_move(&mut self) -> Result<Input, SessionError>;

    /// Tell the player their input could not be read.
    fn reject(&mut self, err: &ParseCoordError) -> Result<(), SessionError>;

    /// Called once as the session ends.
    fn farewell(&mut self) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_from_line() {
        assert_eq!(
            Input::from_line("4, 3\n"),
            Input::Parsed(Coord::new(4, 3).unwrap())
        );
        assert_eq!(Input::from_line("QUIT"), Input::Abort);
        assert_eq!(Input::from_line(" exit "), Input::Abort);
        assert_eq!(
            Input::from_line("4 3"),
            Input::Rejected(ParseCoordError::WrongArity)
        );
        assert_eq!(
            Input::from_line("0, 4"),
            Input::Rejected(ParseCoordError::OutOfRange { row: 0, col: 4 })
        );
    }
}
