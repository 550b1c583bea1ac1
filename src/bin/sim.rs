//! Random playouts: both sides click uniformly among their legal options.
//! Prints a JSON summary of the finished game.

use checkers::{Board, BoardConfig, Coord, GameStatus, TeamId};
use rand::{rngs::SmallRng, seq::IndexedRandom, SeedableRng};
use serde_json::json;

const DEFAULT_MAX_PLIES: usize = 500;

/// Pieces of the side to move that have at least one destination.
fn movable_pieces(board: &Board) -> Vec<Coord> {
    let to_move = board.team_to_move();
    board
        .tiles()
        .iter()
        .filter_map(|t| {
            let coord = t.coord();
            let piece = board.piece_on(coord)?;
            if piece.owner() != to_move {
                return None;
            }
            let reach = board.legal_targets(coord).ok()?;
            (!reach.is_empty()).then_some(coord)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    checkers::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [max_plies]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let max_plies: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_MAX_PLIES,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    let mut plies = 0;
    let mut captures = 0;
    let mut stalled = false;

    while plies < max_plies && !board.status().is_over() {
        if !board.capture_chain_locked() {
            let pieces = movable_pieces(&board);
            let Some(&from) = pieces.choose(&mut rng) else {
                stalled = true;
                break;
            };
            board
                .select(from.row, from.col)
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        let targets = board.marked_tiles();
        let Some(&to) = targets.choose(&mut rng) else {
            stalled = true;
            break;
        };
        let outcome = board.select(to.row, to.col).map_err(|e| anyhow::anyhow!(e))?;
        if matches!(outcome, checkers::SelectOutcome::Captured { .. }) {
            captures += 1;
        }
        plies += 1;
    }

    let winner = match board.status() {
        GameStatus::Won { winner, .. } => Some(format!("{:?}", winner)),
        GameStatus::InProgress => None,
    };
    let result = json!({
        "seed": seed,
        "plies": plies,
        "captures": captures,
        "stalled": stalled,
        "winner": winner,
        "remaining": {
            "one": board.remaining_count(TeamId::One),
            "two": board.remaining_count(TeamId::Two),
        },
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
