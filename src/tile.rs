//! Board cells and their transient reachability markers.

use crate::piece::PieceId;

/// Grid position, row-major, row 0 at team one's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Signed offset; `None` if it would go below zero. Upper bounds are the
    /// board's concern.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Coord> {
        Some(Coord {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Midpoint of a two-step diagonal jump.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

/// Per-tile scratch annotation written by move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Marker {
    #[default]
    None,
    /// Legal quiet-move destination for the piece at the origin.
    MoveFrom(Coord),
    /// Legal capture landing for the piece at the origin.
    CaptureFrom(Coord),
}

impl Marker {
    pub fn is_none(&self) -> bool {
        matches!(self, Marker::None)
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    coord: Coord,
    is_dark_square: bool,
    occupant: Option<PieceId>,
    marker: Marker,
    active: bool,
}

impl Tile {
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            is_dark_square: coord.col % 2 == coord.row % 2,
            occupant: None,
            marker: Marker::None,
            active: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Background shade. Dark squares are the same-parity squares, which
    /// never hold pieces.
    pub fn is_dark_square(&self) -> bool {
        self.is_dark_square
    }

    pub fn is_playable(&self) -> bool {
        !self.is_dark_square
    }

    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_occupant(&mut self, piece: Option<PieceId>) {
        self.occupant = piece;
    }

    pub(crate) fn take_occupant(&mut self) -> Option<PieceId> {
        self.occupant.take()
    }

    pub(crate) fn set_marker(&mut self, marker: Marker) {
        self.marker = marker;
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}
