//! Game board: grid of tiles, piece arena, both teams and the turn state
//! machine driven by tile selection.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, SelectOutcome};
use crate::config::BoardConfig;
use crate::game::GameStatus;
use crate::piece::{Piece, PieceId, Reachable};
use crate::team::{Team, TeamColor, TeamId};
use crate::tile::{Coord, Marker, Tile};

/// Snapshot of a single piece for redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PieceState {
    pub id: PieceId,
    pub owner: TeamId,
    pub is_king: bool,
}

/// Snapshot of a single tile for redraws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TileState {
    pub coord: Coord,
    pub playable: bool,
    pub occupant: Option<PieceState>,
    pub marker: Marker,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct TeamState {
    pub id: TeamId,
    pub color: TeamColor,
    pub is_to_move: bool,
    pub remaining_count: usize,
}

/// Everything a presentation layer needs after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardState {
    pub config: BoardConfig,
    /// Row-major, `height` rows of `width` tiles.
    pub tiles: Vec<TileState>,
    pub teams: [TeamState; 2],
    pub capture_chain_locked: bool,
    pub status: GameStatus,
}

pub struct Board {
    config: BoardConfig,
    grid: Vec<Tile>,
    pieces: Vec<Piece>,
    team_one: Team,
    team_two: Team,
    capture_chain_locked: bool,
    last_mover: Option<TeamId>,
}

impl Board {
    /// Set up a fresh game: stock the back rows of both sides and hand the
    /// first turn to `starting`.
    pub fn new(starting: TeamId, config: BoardConfig) -> Self {
        let mut board = Self::empty(config, starting);
        let safe_rows = config.safe_rows();
        for row in 0..config.height {
            for col in 0..config.width {
                let coord = Coord::new(row, col);
                if !board.grid[board.linear(coord)].is_playable() {
                    continue;
                }
                if row < safe_rows {
                    board.spawn(coord, TeamId::One, false);
                } else if row >= config.height - safe_rows {
                    board.spawn(coord, TeamId::Two, false);
                }
            }
        }
        log::info!(
            "new {}x{} board, {} pieces per side, {} to move",
            config.width,
            config.height,
            board.remaining_count(TeamId::One),
            starting
        );
        board
    }

    /// Build a board from a character grid, first line is row 0.
    ///
    /// `.`, `-` or a space is an empty square, `b`/`B` a team-one man/king and
    /// `r`/`R` a team-two man/king. Blank lines are skipped.
    pub fn from_layout(layout: &str, starting: TeamId) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim_end_matches('\r').chars().collect::<Vec<_>>())
            .collect();
        let width = rows.first().map(Vec::len).ok_or(BoardError::LayoutEmpty)?;
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(BoardError::LayoutRagged { row });
        }

        let config = BoardConfig {
            width,
            height: rows.len(),
        };
        let mut board = Self::empty(config, starting);
        for (row, symbols) in rows.iter().enumerate() {
            for (col, symbol) in symbols.iter().enumerate() {
                let (owner, king) = match symbol {
                    '.' | '-' | ' ' => continue,
                    'b' => (TeamId::One, false),
                    'B' => (TeamId::One, true),
                    'r' => (TeamId::Two, false),
                    'R' => (TeamId::Two, true),
                    other => return Err(BoardError::LayoutUnknownSymbol(*other)),
                };
                let coord = Coord::new(row, col);
                if !board.grid[board.linear(coord)].is_playable() {
                    return Err(BoardError::PieceOnUnplayableSquare { row, col });
                }
                board.spawn(coord, owner, king);
            }
        }
        Ok(board)
    }

    fn empty(config: BoardConfig, starting: TeamId) -> Self {
        let mut grid = Vec::with_capacity(config.tile_count());
        for row in 0..config.height {
            for col in 0..config.width {
                grid.push(Tile::new(Coord::new(row, col)));
            }
        }
        let mut board = Board {
            config,
            grid,
            pieces: Vec::new(),
            team_one: Team::new(TeamId::One),
            team_two: Team::new(TeamId::Two),
            capture_chain_locked: false,
            last_mover: None,
        };
        board.team_mut(starting).set_to_move(true);
        board
    }

    fn spawn(&mut self, coord: Coord, owner: TeamId, king: bool) {
        let id = PieceId(self.pieces.len());
        let mut piece = Piece::new(owner);
        if king {
            piece.crown();
        }
        self.pieces.push(piece);
        self.team_mut(owner).add_piece(id);
        let idx = self.linear(coord);
        self.grid[idx].set_occupant(Some(id));
    }

    fn linear(&self, coord: Coord) -> usize {
        coord.row * self.config.width + coord.col
    }

    fn index(&self, coord: Coord) -> Result<usize, BoardError> {
        if coord.row < self.config.height && coord.col < self.config.width {
            Ok(self.linear(coord))
        } else {
            Err(BoardError::InvalidCoordinate {
                row: coord.row as isize,
                col: coord.col as isize,
            })
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn is_in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.config.height
            && (col as usize) < self.config.width
    }

    /// In-bounds neighbour of `from` along `(d_row, d_col)`.
    pub fn step(&self, from: Coord, d_row: isize, d_col: isize) -> Option<Coord> {
        from.offset(d_row, d_col)
            .filter(|c| c.row < self.config.height && c.col < self.config.width)
    }

    pub fn tile(&self, row: usize, col: usize) -> Result<&Tile, BoardError> {
        let idx = self.index(Coord::new(row, col))?;
        Ok(&self.grid[idx])
    }

    pub fn tile_at(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).ok().map(|idx| &self.grid[idx])
    }

    /// Row-major view of every tile.
    pub fn tiles(&self) -> &[Tile] {
        &self.grid
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.tile(row, col)?.occupant().is_some())
    }

    pub fn piece_at(&self, row: usize, col: usize) -> Result<Option<&Piece>, BoardError> {
        Ok(self
            .tile(row, col)?
            .occupant()
            .and_then(|id| self.pieces.get(id.0)))
    }

    pub fn piece_on(&self, coord: Coord) -> Option<&Piece> {
        self.tile_at(coord)
            .and_then(Tile::occupant)
            .and_then(|id| self.pieces.get(id.0))
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0)
    }

    /// Every piece ever created, captured ones included.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::One => &self.team_one,
            TeamId::Two => &self.team_two,
        }
    }

    fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::One => &mut self.team_one,
            TeamId::Two => &mut self.team_two,
        }
    }

    pub fn team_to_move(&self) -> TeamId {
        if self.team_one.is_to_move() {
            TeamId::One
        } else {
            TeamId::Two
        }
    }

    pub fn remaining_count(&self, id: TeamId) -> usize {
        self.team(id).remaining_count(&self.pieces)
    }

    pub fn capture_chain_locked(&self) -> bool {
        self.capture_chain_locked
    }

    /// Coordinates of every tile currently carrying a marker.
    pub fn marked_tiles(&self) -> Vec<Coord> {
        self.grid
            .iter()
            .filter(|t| !t.marker().is_none())
            .map(Tile::coord)
            .collect()
    }

    pub fn active_tile(&self) -> Option<Coord> {
        self.grid.iter().find(|t| t.is_active()).map(Tile::coord)
    }

    /// Clear the active flag and every marker.
    pub fn clear_selection(&mut self) {
        for tile in &mut self.grid {
            tile.set_active(false);
            tile.set_marker(Marker::None);
        }
    }

    fn clear_markers(&mut self) {
        for tile in &mut self.grid {
            tile.set_marker(Marker::None);
        }
    }

    /// Destinations for the piece at `origin`, without annotating the board.
    pub fn legal_targets(&self, origin: Coord) -> Result<Reachable, BoardError> {
        self.index(origin)?;
        let piece = self.piece_on(origin).ok_or(BoardError::EmptyOrigin(origin))?;
        Ok(piece.reachable(self, origin))
    }

    /// Annotate the destinations of the piece at `origin` and settle the turn.
    ///
    /// `has_captured` suppresses quiet moves and locks the turn to this piece
    /// while a further jump exists. Any completed move or exhausted chain
    /// passes the turn.
    pub fn compute_reachable(
        &mut self,
        origin: Coord,
        has_moved: bool,
        has_captured: bool,
    ) -> Result<(), BoardError> {
        self.clear_markers();
        let reach = self.legal_targets(origin)?;

        if !has_captured {
            for to in &reach.moves {
                let idx = self.index(*to)?;
                self.grid[idx].set_marker(Marker::MoveFrom(origin));
            }
        }
        for to in &reach.captures {
            let idx = self.index(*to)?;
            self.grid[idx].set_marker(Marker::CaptureFrom(origin));
        }

        if has_captured && !reach.captures.is_empty() {
            log::debug!(
                "capture chain continues from ({}, {}), {} landing(s)",
                origin.row,
                origin.col,
                reach.captures.len()
            );
            self.capture_chain_locked = true;
        } else if has_captured || has_moved {
            self.clear_markers();
            self.toggle_turn();
            self.capture_chain_locked = false;
        }
        Ok(())
    }

    /// Commit the quiet move pending on `target`. The turn always passes.
    pub fn execute_move(&mut self, target: Coord) -> Result<SelectOutcome, BoardError> {
        let idx = self.index(target)?;
        let Marker::MoveFrom(origin) = self.grid[idx].marker() else {
            return Err(BoardError::NoPendingMove);
        };
        let promoted = self.relocate(origin, target)?;
        log::debug!(
            "move ({}, {}) -> ({}, {})",
            origin.row,
            origin.col,
            target.row,
            target.col
        );
        self.clear_selection();
        self.compute_reachable(target, true, false)?;
        Ok(SelectOutcome::Moved {
            from: origin,
            to: target,
            promoted,
        })
    }

    /// Commit the capture pending on `target`, removing the jumped piece.
    pub fn execute_capture(&mut self, target: Coord) -> Result<SelectOutcome, BoardError> {
        let idx = self.index(target)?;
        let Marker::CaptureFrom(origin) = self.grid[idx].marker() else {
            return Err(BoardError::NoPendingCapture);
        };
        let captured = target.midpoint(origin);
        let captured_idx = self.index(captured)?;

        let promoted = self.relocate(origin, target)?;
        if let Some(victim) = self.grid[captured_idx].take_occupant() {
            self.pieces[victim.0].mark_captured();
        }
        log::debug!(
            "capture ({}, {}) x ({}, {}) -> ({}, {})",
            origin.row,
            origin.col,
            captured.row,
            captured.col,
            target.row,
            target.col
        );
        self.clear_selection();
        self.compute_reachable(target, true, true)?;
        if let Some(winner) = self.check_victory() {
            log::info!("{} has won", winner);
        }
        Ok(SelectOutcome::Captured {
            from: origin,
            to: target,
            captured,
            promoted,
            chain_locked: self.capture_chain_locked,
        })
    }

    /// Move the piece at `origin` to `target` and check promotion on the
    /// landing row.
    fn relocate(&mut self, origin: Coord, target: Coord) -> Result<bool, BoardError> {
        let origin_idx = self.index(origin)?;
        let target_idx = self.index(target)?;
        let id = self.grid[origin_idx]
            .take_occupant()
            .ok_or(BoardError::EmptyOrigin(origin))?;
        self.grid[target_idx].set_occupant(Some(id));

        let height = self.config.height;
        let piece = &mut self.pieces[id.0];
        self.last_mover = Some(piece.owner());
        let promoted = piece.check_promotion(target.row, height);
        if promoted {
            log::debug!("piece {:?} crowned at ({}, {})", id, target.row, target.col);
        }
        Ok(promoted)
    }

    /// Flip both teams' turn flags.
    pub fn toggle_turn(&mut self) {
        let one = self.team_one.is_to_move();
        self.team_one.set_to_move(!one);
        self.team_two.set_to_move(one);
        log::debug!("{} to move", self.team_to_move());
    }

    /// Winner once the opponent has no pieces left. If both sides are empty
    /// the team that moved last wins.
    pub fn check_victory(&self) -> Option<TeamId> {
        let one = self.remaining_count(TeamId::One);
        let two = self.remaining_count(TeamId::Two);
        match (one, two) {
            (0, 0) => self.last_mover,
            (0, _) => Some(TeamId::Two),
            (_, 0) => Some(TeamId::One),
            _ => None,
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.check_victory() {
            Some(winner) => GameStatus::Won {
                winner,
                loser: winner.opponent(),
            },
            None => GameStatus::InProgress,
        }
    }

    /// The single input entry point: a click on `(row, col)`.
    pub fn select(&mut self, row: usize, col: usize) -> Result<SelectOutcome, BoardError> {
        if let Some(winner) = self.check_victory() {
            return Err(BoardError::GameOver(winner));
        }
        let coord = Coord::new(row, col);
        let idx = self.index(coord)?;
        let tile = &self.grid[idx];

        match tile.marker() {
            Marker::MoveFrom(_) => return self.execute_move(coord),
            Marker::CaptureFrom(_) => return self.execute_capture(coord),
            Marker::None => {}
        }
        if self.capture_chain_locked {
            return Ok(SelectOutcome::Ignored);
        }

        let to_move = self.team_to_move();
        let own_piece = tile
            .occupant()
            .and_then(|id| self.pieces.get(id.0))
            .is_some_and(|p| p.owner() == to_move);
        if !own_piece || tile.is_active() {
            self.clear_selection();
            return Ok(SelectOutcome::Cleared);
        }

        self.clear_selection();
        self.grid[idx].set_active(true);
        self.compute_reachable(coord, false, false)?;
        log::debug!("selected ({}, {}) for {}", row, col, to_move);
        Ok(SelectOutcome::Selected(coord))
    }

    /// Snapshot of the full board for redraws.
    pub fn state(&self) -> BoardState {
        BoardState::from(self)
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        let tiles = b
            .grid
            .iter()
            .map(|t| TileState {
                coord: t.coord(),
                playable: t.is_playable(),
                occupant: t.occupant().and_then(|id| {
                    b.piece(id).map(|p| PieceState {
                        id,
                        owner: p.owner(),
                        is_king: p.is_king(),
                    })
                }),
                marker: t.marker(),
                active: t.is_active(),
            })
            .collect();
        let team_state = |id: TeamId| TeamState {
            id,
            color: id.color(),
            is_to_move: b.team(id).is_to_move(),
            remaining_count: b.remaining_count(id),
        };
        BoardState {
            config: b.config,
            tiles,
            teams: [team_state(TeamId::One), team_state(TeamId::Two)],
            capture_chain_locked: b.capture_chain_locked,
            status: b.status(),
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {}x{},\n  to_move: {:?},\n  locked: {},\n  remaining: ({}, {})\n}}",
            self.config.width,
            self.config.height,
            self.team_to_move(),
            self.capture_chain_locked,
            self.remaining_count(TeamId::One),
            self.remaining_count(TeamId::Two)
        )
    }
}
