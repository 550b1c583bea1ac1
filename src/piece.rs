//! Pieces and their move/capture generation.

use alloc::vec::Vec;

use crate::board::Board;
use crate::team::TeamId;
use crate::tile::Coord;

/// Index of a piece in the board's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PieceId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    owner: TeamId,
    is_king: bool,
    is_captured: bool,
}

/// Destinations available to one piece from one origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reachable {
    /// Open diagonal neighbours.
    pub moves: Vec<Coord>,
    /// Landing squares behind an adjacent opponent piece.
    pub captures: Vec<Coord>,
}

impl Reachable {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }
}

impl Piece {
    pub fn new(owner: TeamId) -> Self {
        Self {
            owner,
            is_king: false,
            is_captured: false,
        }
    }

    pub fn owner(&self) -> TeamId {
        self.owner
    }

    pub fn is_king(&self) -> bool {
        self.is_king
    }

    pub fn is_captured(&self) -> bool {
        self.is_captured
    }

    pub(crate) fn crown(&mut self) {
        self.is_king = true;
    }

    pub(crate) fn mark_captured(&mut self) {
        self.is_captured = true;
    }

    /// Diagonal steps this piece may take: forward pair first, then the
    /// backward pair for kings.
    pub fn directions(&self) -> impl Iterator<Item = (isize, isize)> {
        let fwd = self.owner.forward();
        let count = if self.is_king { 4 } else { 2 };
        [(fwd, -1), (fwd, 1), (-fwd, -1), (-fwd, 1)]
            .into_iter()
            .take(count)
    }

    /// Whether landing on `row` promotes this piece.
    pub fn promotes_on(&self, row: usize, height: usize) -> bool {
        match self.owner {
            TeamId::One => row + 1 == height,
            TeamId::Two => row == 0,
        }
    }

    /// Crown the piece if `row` is the far edge. Returns `true` only on the
    /// transition, so repeated checks report nothing new.
    pub fn check_promotion(&mut self, row: usize, height: usize) -> bool {
        if !self.is_king && self.promotes_on(row, height) {
            self.is_king = true;
            return true;
        }
        false
    }

    /// Compute every quiet move and capture landing from `origin` without
    /// touching the board.
    pub fn reachable(&self, board: &Board, origin: Coord) -> Reachable {
        let mut reach = Reachable::default();
        let mut occupied = Vec::new();

        for (d_row, d_col) in self.directions() {
            let Some(next) = board.step(origin, d_row, d_col) else {
                continue;
            };
            if board.tile_at(next).is_some_and(|t| t.occupant().is_some()) {
                occupied.push((next, d_row, d_col));
            } else {
                reach.moves.push(next);
            }
        }

        for (blocker, d_row, d_col) in occupied {
            let is_enemy = board
                .piece_on(blocker)
                .is_some_and(|p| p.owner() != self.owner);
            if !is_enemy {
                continue;
            }
            // The landing must be re-checked against the grid: a blocker on the
            // edge has no square behind it.
            if let Some(landing) = board.step(blocker, d_row, d_col) {
                if board.tile_at(landing).is_some_and(|t| t.occupant().is_none()) {
                    reach.captures.push(landing);
                }
            }
        }

        reach
    }
}
