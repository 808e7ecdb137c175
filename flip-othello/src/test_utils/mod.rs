//! Utilities used for testing and benchmarking.

pub mod fixture;

mod perft;
pub use perft::run_perft;
