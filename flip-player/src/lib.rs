//! Terminal front-end for `flip-othello`: where moves come from, how the
//! board is drawn, and the loop that ties them to the rules engine.

pub mod cli;
pub mod config;
pub mod connectors;
pub mod render;
pub mod session;

pub use config::Config;
pub use session::{AbortSignal, Session, SessionError, Summary};
