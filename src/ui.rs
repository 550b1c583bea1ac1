#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

use crate::{
    board::{BoardState, TeamState, TileState},
    game::GameStatus,
    team::TeamId,
    tile::Marker,
    Board,
};

fn tile_symbol(tile: &TileState) -> char {
    if let Some(p) = tile.occupant {
        return match (p.owner, p.is_king) {
            (TeamId::One, false) => 'b',
            (TeamId::One, true) => 'B',
            (TeamId::Two, false) => 'r',
            (TeamId::Two, true) => 'R',
        };
    }
    match tile.marker {
        Marker::MoveFrom(_) => '*',
        Marker::CaptureFrom(_) => 'x',
        Marker::None if tile.playable => '.',
        Marker::None => ' ',
    }
}

/// "Black Team: 12 pieces left", with a marker on the side to move.
pub fn team_summary(team: &TeamState) -> String {
    let noun = if team.remaining_count == 1 {
        "piece"
    } else {
        "pieces"
    };
    let turn = if team.is_to_move { " <" } else { "" };
    std::format!(
        "{} Team: {} {} left{}",
        team.color.name(),
        team.remaining_count,
        noun,
        turn
    )
}

/// End-of-game message, `None` while the game is running.
pub fn victory_banner(status: &GameStatus) -> Option<String> {
    status.winner().map(|winner| {
        std::format!(
            "The {} team has won. Start a new game to play again.",
            winner.color().label()
        )
    })
}

/// Render a snapshot as a text grid. Row numbers run down the left edge,
/// column numbers along the top; the active piece is wrapped in brackets.
pub fn render_state(state: &BoardState) -> String {
    let width = state.config.width;
    let mut out = String::new();
    for team in &state.teams {
        let _ = writeln!(out, "{}", team_summary(team));
    }
    out.push_str("\n   ");
    for c in 0..width {
        let _ = write!(out, "{:>3}", c);
    }
    out.push('\n');
    for (r, row) in state.tiles.chunks(width.max(1)).enumerate() {
        let _ = write!(out, "{:>3}", r);
        for tile in row {
            let sym = tile_symbol(tile);
            if tile.active {
                let _ = write!(out, "[{}]", sym);
            } else {
                let _ = write!(out, " {} ", sym);
            }
        }
        out.push('\n');
    }
    if state.capture_chain_locked {
        out.push_str("Capture chain in progress: keep jumping with the same piece.\n");
    }
    if let Some(banner) = victory_banner(&state.status) {
        out.push('\n');
        out.push_str(&banner);
        out.push('\n');
    }
    out
}

pub fn print_board(board: &Board) {
    std::print!("{}", render_state(&board.state()));
}
