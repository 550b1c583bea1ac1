#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use checkers::{
    init_logging, print_board, Board, BoardConfig, BoardError, SelectOutcome,
    TeamId,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct Setup {
    /// Board width; anything but a positive integer falls back to 8.
    #[arg(long, default_value = "8")]
    width: String,
    /// Board height; anything but a positive integer falls back to 8.
    #[arg(long, default_value = "8")]
    height: String,
    /// Team that moves first: "1" for black, anything else for red.
    #[arg(long, default_value = "1")]
    first: String,
    /// Start from a layout file instead of the standard setup.
    #[arg(long)]
    layout: Option<PathBuf>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player game in the terminal.
    Play {
        #[command(flatten)]
        setup: Setup,
    },
    /// Apply a sequence of selections and print the resulting board.
    Replay {
        #[command(flatten)]
        setup: Setup,
        /// Selections as "row,col", applied in order.
        #[arg(long = "select", value_name = "ROW,COL")]
        selections: Vec<String>,
        /// Print the final state as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn build_board(setup: &Setup) -> anyhow::Result<Board> {
    let starting = TeamId::from_selector(&setup.first);
    match &setup.layout {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Board::from_layout(&text, starting).map_err(|e| anyhow::anyhow!(e))
        }
        None => Ok(Board::new(
            starting,
            BoardConfig::parse(&setup.width, &setup.height),
        )),
    }
}

#[cfg(feature = "std")]
fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

#[cfg(feature = "std")]
fn describe(outcome: &SelectOutcome) -> Option<String> {
    match outcome {
        SelectOutcome::Moved { to, promoted, .. } => Some(format!(
            "Moved to ({}, {}){}",
            to.row,
            to.col,
            if *promoted { ", crowned!" } else { "" }
        )),
        SelectOutcome::Captured {
            captured,
            chain_locked,
            ..
        } => Some(format!(
            "Captured the piece at ({}, {}){}",
            captured.row,
            captured.col,
            if *chain_locked { ", jump again" } else { "" }
        )),
        SelectOutcome::Ignored => Some("Finish the capture chain first".to_string()),
        _ => None,
    }
}

#[cfg(feature = "std")]
fn play(mut board: Board) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&board);
        if board.status().is_over() {
            break;
        }
        print!("{} > ", board.team_to_move().color().name());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }
        let Some((row, col)) = parse_coord(input) else {
            println!("Enter a square as \"row,col\" or q to quit");
            continue;
        };
        match board.select(row, col) {
            Ok(outcome) => {
                if let Some(msg) = describe(&outcome) {
                    println!("{}", msg);
                }
            }
            Err(e @ BoardError::InvalidCoordinate { .. }) => println!("{}", e),
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { setup } => {
            let board = build_board(&setup)?;
            play(board)?;
        }
        Commands::Replay {
            setup,
            selections,
            json,
        } => {
            let mut board = build_board(&setup)?;
            let mut outcomes = Vec::with_capacity(selections.len());
            for sel in &selections {
                let (row, col) = parse_coord(sel)
                    .ok_or_else(|| anyhow::anyhow!("bad selection {:?}", sel))?;
                let outcome = board.select(row, col).map_err(|e| anyhow::anyhow!(e))?;
                outcomes.push(outcome);
            }
            if json {
                let report = serde_json::json!({
                    "outcomes": outcomes,
                    "state": board.state(),
                });
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print_board(&board);
            }
        }
    }
    Ok(())
}
