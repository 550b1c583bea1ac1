//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardConfig, BoardError, Coord, GameStatus, Marker, SelectOutcome, TeamId};

#[cfg(feature = "std")]
pub use crate::{print_board, render_state};
