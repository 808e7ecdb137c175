//! Connectors supply moves to a session and present the board back.

mod connector;
mod console;
mod scripted;

pub use connector::{Connector, Input};
pub use console::ConsoleConnector;
pub use scripted::ScriptedConnector;
