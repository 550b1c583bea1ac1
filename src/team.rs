//! Team identity, turn flag and piece roster.

use alloc::vec::Vec;
use core::fmt;

use crate::piece::{Piece, PieceId};

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum TeamId {
    /// Starts on the low rows and advances toward increasing row index.
    One,
    /// Starts on the high rows and advances toward decreasing row index.
    Two,
}

impl TeamId {
    /// `"1"` selects team one, anything else team two.
    pub fn from_selector(selector: &str) -> Self {
        if selector.trim() == "1" {
            TeamId::One
        } else {
            TeamId::Two
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            TeamId::One => TeamId::Two,
            TeamId::Two => TeamId::One,
        }
    }

    /// Row step of a forward move.
    pub fn forward(self) -> isize {
        match self {
            TeamId::One => 1,
            TeamId::Two => -1,
        }
    }

    pub fn color(self) -> TeamColor {
        match self {
            TeamId::One => TeamColor::Dark,
            TeamId::Two => TeamColor::Light,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} team", self.color().label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum TeamColor {
    Dark,
    Light,
}

impl TeamColor {
    /// Display name shown to players.
    pub fn name(self) -> &'static str {
        match self {
            TeamColor::Dark => "Black",
            TeamColor::Light => "Red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamColor::Dark => "black",
            TeamColor::Light => "red",
        }
    }
}

/// A side: color, turn flag and every piece it has ever owned.
#[derive(Debug, Clone)]
pub struct Team {
    id: TeamId,
    is_to_move: bool,
    roster: Vec<PieceId>,
}

impl Team {
    pub fn new(id: TeamId) -> Self {
        Self {
            id,
            is_to_move: false,
            roster: Vec::new(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn color(&self) -> TeamColor {
        self.id.color()
    }

    pub fn is_to_move(&self) -> bool {
        self.is_to_move
    }

    pub(crate) fn set_to_move(&mut self, to_move: bool) {
        self.is_to_move = to_move;
    }

    /// Append-only.
    pub(crate) fn add_piece(&mut self, piece: PieceId) {
        self.roster.push(piece);
    }

    pub fn roster(&self) -> &[PieceId] {
        &self.roster
    }

    /// Pieces of this team still in play, counted from the arena on demand.
    pub fn remaining_count(&self, pieces: &[Piece]) -> usize {
        self.roster
            .iter()
            .filter(|id| pieces.get(id.0).is_some_and(|p| !p.is_captured()))
            .count()
    }
}
