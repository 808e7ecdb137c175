//! [`Connector`] for a human at a terminal.

use super::{Connector, Input};
use crate::render::{BoardView, Glyphs};
use crate::session::{AbortSignal, SessionError};
use flip_othello::{ParseCoordError, Snapshot};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing::{debug, warn};

#[derive(Debug, PartialEq, Eq)]
enum Event {
    Line(String),
    Closed,
    Interrupted,
}

/// Reads moves from stdin and draws the board on stdout.
///
/// Lines and Ctrl-C arrive through one channel, so an interrupt ends a
/// blocked read instead of killing the process mid-prompt.
pub struct ConsoleConnector {
    events: Receiver<Event>,
    glyphs: Glyphs,
}

impl ConsoleConnector {
    /// Start the stdin and interrupt listeners. Ctrl-C also raises `abort`.
    pub fn spawn(glyphs: Glyphs, abort: AbortSignal) -> Self {
        let (tx, events) = mpsc::channel();
        spawn_reader(tx.clone());
        spawn_interrupt_listener(tx, abort);
        Self { events, glyphs }
    }
}

fn spawn_reader(tx: Sender<Event>) {
    thread::spawn(move || forward_lines(io::stdin().lock(), &tx));
}

/// Send each line of `reader` as an [`Event::Line`], then [`Event::Closed`]
/// at EOF or on a read error. Bytes that are not UTF-8 are replaced, so a
/// garbled line is rejected as a move instead of ending the game.
fn forward_lines<R: BufRead>(mut reader: R, tx: &Sender<Event>) {
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf)
                    .trim_end_matches(&['\r', '\n'][..])
                    .to_string();
                if tx.send(Event::Line(line)).is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                warn!(error = %err, "stdin read failed");
                break;
            }
        }
    }

    let _ = tx.send(Event::Closed);
}

fn spawn_interrupt_listener(tx: Sender<Event>, abort: AbortSignal) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!(error = %err, "cannot listen for Ctrl-C");
                return;
            }
        };

        if runtime.block_on(tokio::signal::ctrl_c()).is_ok() {
            debug!("interrupt received");
            abort.raise();
            let _ = tx.send(Event::Interrupted);
        }
    });
}

impl Connector for ConsoleConnector {
    fn show(&mut self, snapshot: &Snapshot) -> Result<(), SessionError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", BoardView::new(snapshot, &self.glyphs))?;
        out.flush()?;
        Ok(())
    }

    fn read_move(&mut self) -> Result<Input, SessionError> {
        match self.events.recv() {
            Ok(Event::Line(line)) => Ok(Input::from_line(&line)),
            Ok(Event::Closed) | Ok(Event::Interrupted) | Err(_) => Ok(Input::Abort),
        }
    }

    fn reject(&mut self, _err: &ParseCoordError) -> Result<(), SessionError> {
        let mut out = io::stdout().lock();
        writeln!(out, "Invalid input, enter again")?;
        out.flush()?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<(), SessionError> {
        let mut out = io::stdout().lock();
        writeln!(out, "OTHELLO: Aborting game, goodbye")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flip_othello::Coord;

    fn events(input: &[u8]) -> Vec<Event> {
        let (tx, rx) = mpsc::channel();
        forward_lines(input, &tx);
        drop(tx);
        rx.into_iter().collect()
    }

    #[test]
    fn forwards_lines_then_closes() {
        assert_eq!(
            events(b"4, 3\r\n3, 3"),
            vec![
                Event::Line("4, 3".to_string()),
                Event::Line("3, 3".to_string()),
                Event::Closed,
            ]
        );
        assert_eq!(events(b""), vec![Event::Closed]);
    }

    #[test]
    fn invalid_utf8_does_not_close() {
        let events = events(b"\xff\xfe\n4, 3\n");
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], Event::Line(line) if !line.is_empty()));
        assert_eq!(events[1], Event::Line("4, 3".to_string()));
        assert_eq!(events[2], Event::Closed);
    }

    #[test]
    fn garbled_line_is_rejected_and_play_continues() {
        let (tx, rx) = mpsc::channel();
        forward_lines(&b"\xff\xfe\n4, 3\n"[..], &tx);
        drop(tx);
        let mut connector = ConsoleConnector {
            events: rx,
            glyphs: Glyphs::default(),
        };

        assert!(matches!(
            connector.read_move().unwrap(),
            Input::Rejected(ParseCoordError::WrongArity)
        ));
        assert_eq!(
            connector.read_move().unwrap(),
            Input::Parsed(Coord::new(4, 3).unwrap())
        );
        assert_eq!(connector.read_move().unwrap(), Input::Abort);
        // Reader gone and channel drained.
        assert_eq!(connector.read_move().unwrap(), Input::Abort);
    }
}
