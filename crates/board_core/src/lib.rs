//! Minimal chessboard model consumed by the GUI.
//!
//! Knows which piece sits on which square and nothing else: no move
//! legality, no turn tracking, no game rules.

pub mod board;
pub mod types;

pub use board::*;
pub use types::*;
