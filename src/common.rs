//! Common types for checkers: board errors and selection outcomes.

use crate::team::TeamId;
use crate::tile::Coord;

/// What a single `select` call did to the board.
///
/// Every variant except `Ignored` means the state changed and a presentation
/// layer should redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum SelectOutcome {
    /// A piece of the side to move was selected and its destinations marked.
    Selected(Coord),
    /// Selection and markers were cleared.
    Cleared,
    /// A quiet move was committed. The turn always passes.
    Moved {
        from: Coord,
        to: Coord,
        promoted: bool,
    },
    /// A capture was committed.
    Captured {
        from: Coord,
        to: Coord,
        captured: Coord,
        promoted: bool,
        /// `true` when the same piece has a further jump and must continue.
        chain_locked: bool,
    },
    /// The click had no effect (a capture chain is locked elsewhere).
    Ignored,
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the grid.
    InvalidCoordinate { row: isize, col: isize },
    /// Tile has no pending move marker.
    NoPendingMove,
    /// Tile has no pending capture marker.
    NoPendingCapture,
    /// Marker origin does not hold a piece.
    EmptyOrigin(Coord),
    /// A winner exists; the board accepts no more input.
    GameOver(TeamId),
    /// Layout text contained no rows.
    LayoutEmpty,
    /// Layout row length differs from the first row.
    LayoutRagged { row: usize },
    /// Layout contained an unknown symbol.
    LayoutUnknownSymbol(char),
    /// Layout placed a piece on a square pieces can never occupy.
    PieceOnUnplayableSquare { row: usize, col: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate ({}, {}) is out of bounds", row, col)
            }
            BoardError::NoPendingMove => write!(f, "Tile is not a pending move destination"),
            BoardError::NoPendingCapture => {
                write!(f, "Tile is not a pending capture destination")
            }
            BoardError::EmptyOrigin(c) => {
                write!(f, "No piece at move origin ({}, {})", c.row, c.col)
            }
            BoardError::GameOver(winner) => write!(f, "Game is over, {} won", winner),
            BoardError::LayoutEmpty => write!(f, "Layout has no rows"),
            BoardError::LayoutRagged { row } => {
                write!(f, "Layout row {} has a different width", row)
            }
            BoardError::LayoutUnknownSymbol(ch) => write!(f, "Unknown layout symbol '{}'", ch),
            BoardError::PieceOnUnplayableSquare { row, col } => {
                write!(f, "Square ({}, {}) cannot hold a piece", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
