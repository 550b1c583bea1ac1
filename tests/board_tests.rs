use checkers::{
    Board, BoardConfig, BoardError, Coord, GameStatus, Marker, SelectOutcome, TeamId,
};

/// 8x8 layout with the given `(row, col, symbol)` pieces, everything else empty.
fn layout(pieces: &[(usize, usize, char)]) -> String {
    let mut rows = vec![vec!['.'; 8]; 8];
    for &(r, c, sym) in pieces {
        rows[r][c] = sym;
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn marked(board: &Board) -> Vec<(Coord, Marker)> {
    board
        .marked_tiles()
        .into_iter()
        .map(|c| (c, board.tile(c.row, c.col).unwrap().marker()))
        .collect()
}

#[test]
fn test_initial_setup_standard_board() {
    let board = Board::new(TeamId::One, BoardConfig::default());
    assert_eq!(board.remaining_count(TeamId::One), 12);
    assert_eq!(board.remaining_count(TeamId::Two), 12);
    assert_eq!(board.team(TeamId::One).roster().len(), 12);
    assert!(board.team(TeamId::One).is_to_move());
    assert!(!board.team(TeamId::Two).is_to_move());
    assert!(!board.capture_chain_locked());
    assert_eq!(board.status(), GameStatus::InProgress);

    // team one fills rows 0..3, team two rows 5..8, playable squares only
    assert_eq!(board.piece_at(0, 1).unwrap().unwrap().owner(), TeamId::One);
    assert_eq!(board.piece_at(2, 7).unwrap().unwrap().owner(), TeamId::One);
    assert_eq!(board.piece_at(5, 0).unwrap().unwrap().owner(), TeamId::Two);
    assert_eq!(board.piece_at(7, 6).unwrap().unwrap().owner(), TeamId::Two);
    assert!(board.piece_at(0, 0).unwrap().is_none());
    assert!(!board.is_occupied(3, 0).unwrap());
    assert!(!board.is_occupied(4, 1).unwrap());
    for tile in board.tiles() {
        if tile.occupant().is_some() {
            assert!(tile.is_playable());
            assert!(!tile.is_dark_square());
        }
    }
}

#[test]
fn test_starting_team_selector() {
    let board = Board::new(TeamId::from_selector("2"), BoardConfig::default());
    assert_eq!(board.team_to_move(), TeamId::Two);
    let board = Board::new(TeamId::from_selector("1"), BoardConfig::default());
    assert_eq!(board.team_to_move(), TeamId::One);
}

#[test]
fn test_small_board_setup() {
    let board = Board::new(TeamId::One, BoardConfig::new(Some(6), Some(6)));
    assert_eq!(board.remaining_count(TeamId::One), 6);
    assert_eq!(board.remaining_count(TeamId::Two), 6);
    assert_eq!(board.width(), 6);
    assert_eq!(board.height(), 6);
}

#[test]
fn test_bounds_checks() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    assert!(board.is_in_bounds(0, 0));
    assert!(board.is_in_bounds(7, 7));
    assert!(!board.is_in_bounds(-1, 0));
    assert!(!board.is_in_bounds(0, 8));
    assert_eq!(
        board.is_occupied(8, 0).unwrap_err(),
        BoardError::InvalidCoordinate { row: 8, col: 0 }
    );
    assert!(board.piece_at(3, 9).is_err());
    assert_eq!(
        board.select(9, 9).unwrap_err(),
        BoardError::InvalidCoordinate { row: 9, col: 9 }
    );
}

#[test]
fn test_simple_move_passes_turn() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());

    let outcome = board.select(2, 1).unwrap();
    assert_eq!(outcome, SelectOutcome::Selected(Coord::new(2, 1)));
    assert!(board.tile(2, 1).unwrap().is_active());
    assert_eq!(
        marked(&board),
        vec![
            (Coord::new(3, 0), Marker::MoveFrom(Coord::new(2, 1))),
            (Coord::new(3, 2), Marker::MoveFrom(Coord::new(2, 1))),
        ]
    );

    let outcome = board.select(3, 0).unwrap();
    assert_eq!(
        outcome,
        SelectOutcome::Moved {
            from: Coord::new(2, 1),
            to: Coord::new(3, 0),
            promoted: false,
        }
    );
    assert!(board.piece_at(2, 1).unwrap().is_none());
    assert_eq!(board.piece_at(3, 0).unwrap().unwrap().owner(), TeamId::One);
    assert_eq!(board.team_to_move(), TeamId::Two);
    assert!(!board.capture_chain_locked());
    assert!(board.marked_tiles().is_empty());
    assert!(board.active_tile().is_none());
}

#[test]
fn test_blocked_piece_has_no_moves() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    board.select(0, 1).unwrap();
    assert!(board.marked_tiles().is_empty());
    assert_eq!(board.team_to_move(), TeamId::One);
}

#[test]
fn test_reselect_clears_selection() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    board.select(2, 1).unwrap();
    assert_eq!(board.select(2, 1).unwrap(), SelectOutcome::Cleared);
    assert!(board.marked_tiles().is_empty());
    assert!(board.active_tile().is_none());
    assert_eq!(board.team_to_move(), TeamId::One);
}

#[test]
fn test_selecting_another_own_piece_moves_selection() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    board.select(2, 1).unwrap();
    board.select(2, 5).unwrap();
    assert_eq!(board.active_tile(), Some(Coord::new(2, 5)));
    assert!(marked(&board)
        .iter()
        .all(|(_, m)| *m == Marker::MoveFrom(Coord::new(2, 5))));
}

#[test]
fn test_opponent_or_empty_click_clears() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    board.select(2, 1).unwrap();
    assert_eq!(board.select(5, 0).unwrap(), SelectOutcome::Cleared);
    assert!(board.marked_tiles().is_empty());

    board.select(2, 1).unwrap();
    assert_eq!(board.select(4, 5).unwrap(), SelectOutcome::Cleared);
    assert!(board.active_tile().is_none());
}

#[test]
fn test_move_on_unmarked_tile_is_rejected() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    assert_eq!(
        board.execute_move(Coord::new(3, 0)).unwrap_err(),
        BoardError::NoPendingMove
    );
    assert_eq!(
        board.execute_capture(Coord::new(3, 0)).unwrap_err(),
        BoardError::NoPendingCapture
    );
}

#[test]
fn test_single_capture_ends_turn() {
    let text = layout(&[(4, 3, 'b'), (5, 4, 'r'), (7, 0, 'r')]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();

    board.select(4, 3).unwrap();
    assert_eq!(
        board.tile(6, 5).unwrap().marker(),
        Marker::CaptureFrom(Coord::new(4, 3))
    );
    // quiet move still offered alongside the capture
    assert_eq!(
        board.tile(5, 2).unwrap().marker(),
        Marker::MoveFrom(Coord::new(4, 3))
    );

    let outcome = board.select(6, 5).unwrap();
    assert_eq!(
        outcome,
        SelectOutcome::Captured {
            from: Coord::new(4, 3),
            to: Coord::new(6, 5),
            captured: Coord::new(5, 4),
            promoted: false,
            chain_locked: false,
        }
    );
    assert!(board.piece_at(5, 4).unwrap().is_none());
    assert_eq!(board.remaining_count(TeamId::Two), 1);
    assert_eq!(board.team_to_move(), TeamId::Two);
    assert!(!board.capture_chain_locked());
    let captured = board.team(TeamId::Two).roster()[0];
    assert!(board.piece(captured).unwrap().is_captured());
}

#[test]
fn test_capture_chain_locks_turn() {
    let text = layout(&[
        (2, 1, 'b'),
        (2, 5, 'b'),
        (3, 2, 'r'),
        (5, 4, 'r'),
        (7, 0, 'r'),
    ]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();

    board.select(2, 1).unwrap();
    let outcome = board.select(4, 3).unwrap();
    assert!(matches!(
        outcome,
        SelectOutcome::Captured {
            chain_locked: true,
            ..
        }
    ));
    assert_eq!(board.team_to_move(), TeamId::One);
    assert!(board.capture_chain_locked());
    // only the follow-up jump is offered, no quiet moves
    assert_eq!(
        marked(&board),
        vec![(Coord::new(6, 5), Marker::CaptureFrom(Coord::new(4, 3)))]
    );

    // other pieces cannot be picked while the chain is locked
    assert_eq!(board.select(2, 5).unwrap(), SelectOutcome::Ignored);
    assert!(board.capture_chain_locked());

    let outcome = board.select(6, 5).unwrap();
    assert!(matches!(
        outcome,
        SelectOutcome::Captured {
            captured: Coord { row: 5, col: 4 },
            chain_locked: false,
            ..
        }
    ));
    assert_eq!(board.team_to_move(), TeamId::Two);
    assert!(!board.capture_chain_locked());
    assert_eq!(board.remaining_count(TeamId::Two), 1);
}

#[test]
fn test_own_piece_is_not_capturable() {
    let text = layout(&[(4, 3, 'b'), (5, 4, 'b'), (7, 0, 'r')]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();
    board.select(4, 3).unwrap();
    assert!(marked(&board)
        .iter()
        .all(|(_, m)| matches!(m, Marker::MoveFrom(_))));
}

#[test]
fn test_capture_at_edge_has_no_landing() {
    let text = layout(&[(5, 6, 'b'), (6, 7, 'r'), (7, 0, 'r')]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();
    board.select(5, 6).unwrap();
    assert_eq!(
        marked(&board),
        vec![(Coord::new(6, 5), Marker::MoveFrom(Coord::new(5, 6)))]
    );
}

#[test]
fn test_promotion_and_king_moves_backward() {
    let text = layout(&[(6, 1, 'b'), (2, 5, 'r')]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();

    board.select(6, 1).unwrap();
    let outcome = board.select(7, 0).unwrap();
    assert_eq!(
        outcome,
        SelectOutcome::Moved {
            from: Coord::new(6, 1),
            to: Coord::new(7, 0),
            promoted: true,
        }
    );
    assert!(board.piece_at(7, 0).unwrap().unwrap().is_king());

    board.select(2, 5).unwrap();
    board.select(1, 4).unwrap();
    assert_eq!(board.team_to_move(), TeamId::One);

    board.select(7, 0).unwrap();
    assert_eq!(
        marked(&board),
        vec![(Coord::new(6, 1), Marker::MoveFrom(Coord::new(7, 0)))]
    );
    let outcome = board.select(6, 1).unwrap();
    assert!(matches!(outcome, SelectOutcome::Moved { promoted: false, .. }));
    assert!(board.piece_at(6, 1).unwrap().unwrap().is_king());
}

#[test]
fn test_king_generates_four_directions() {
    let king = layout(&[(4, 3, 'R'), (0, 1, 'b')]);
    let board = Board::from_layout(&king, TeamId::Two).unwrap();
    let reach = board.legal_targets(Coord::new(4, 3)).unwrap();
    assert_eq!(reach.moves.len(), 4);
    assert!(reach.moves.contains(&Coord::new(5, 2)));
    assert!(reach.moves.contains(&Coord::new(5, 4)));

    let man = layout(&[(4, 3, 'r'), (0, 1, 'b')]);
    let board = Board::from_layout(&man, TeamId::Two).unwrap();
    let reach = board.legal_targets(Coord::new(4, 3)).unwrap();
    assert_eq!(reach.moves, vec![Coord::new(3, 2), Coord::new(3, 4)]);
}

#[test]
fn test_king_captures_backward() {
    let text = layout(&[(2, 3, 'R'), (3, 4, 'b'), (0, 1, 'b')]);
    let board = Board::from_layout(&text, TeamId::Two).unwrap();
    let reach = board.legal_targets(Coord::new(2, 3)).unwrap();
    assert_eq!(reach.captures, vec![Coord::new(4, 5)]);
}

#[test]
fn test_victory_and_game_over() {
    let text = layout(&[(4, 3, 'b'), (5, 4, 'r')]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();
    board.select(4, 3).unwrap();
    board.select(6, 5).unwrap();

    assert_eq!(board.check_victory(), Some(TeamId::One));
    assert_eq!(
        board.status(),
        GameStatus::Won {
            winner: TeamId::One,
            loser: TeamId::Two
        }
    );
    assert_eq!(
        board.select(6, 5).unwrap_err(),
        BoardError::GameOver(TeamId::One)
    );
}

#[test]
fn test_layout_errors() {
    assert_eq!(
        Board::from_layout("", TeamId::One).unwrap_err(),
        BoardError::LayoutEmpty
    );
    assert_eq!(
        Board::from_layout("....\n...", TeamId::One).unwrap_err(),
        BoardError::LayoutRagged { row: 1 }
    );
    assert_eq!(
        Board::from_layout(".q..\n....", TeamId::One).unwrap_err(),
        BoardError::LayoutUnknownSymbol('q')
    );
    assert_eq!(
        Board::from_layout("b...\n....", TeamId::One).unwrap_err(),
        BoardError::PieceOnUnplayableSquare { row: 0, col: 0 }
    );
}

#[test]
fn test_state_snapshot() {
    let mut board = Board::new(TeamId::One, BoardConfig::default());
    board.select(2, 1).unwrap();
    let state = board.state();
    assert_eq!(state.tiles.len(), 64);
    assert_eq!(state.teams[0].remaining_count, 12);
    assert!(state.teams[0].is_to_move);
    assert!(!state.teams[1].is_to_move);
    let active = &state.tiles[2 * 8 + 1];
    assert!(active.active);
    assert_eq!(active.occupant.unwrap().owner, TeamId::One);
    assert_eq!(
        state.tiles[3 * 8].marker,
        Marker::MoveFrom(Coord::new(2, 1))
    );
}

#[test]
fn test_layout_spaces_are_empty_squares() {
    let board = Board::from_layout(" b\nr.\n", TeamId::One).unwrap();
    assert_eq!(board.width(), 2);
    assert_eq!(board.height(), 2);
    assert!(!board.is_occupied(0, 0).unwrap());
    assert_eq!(board.piece_at(0, 1).unwrap().unwrap().owner(), TeamId::One);
    assert_eq!(board.piece_at(1, 0).unwrap().unwrap().owner(), TeamId::Two);

    let crlf = Board::from_layout(" b   \r\nr . .\r\n", TeamId::Two).unwrap();
    assert_eq!(crlf.width(), 5);
    assert_eq!(crlf.height(), 2);
    assert_eq!(crlf.piece_at(0, 1).unwrap().unwrap().owner(), TeamId::One);
    assert_eq!(crlf.piece_at(1, 0).unwrap().unwrap().owner(), TeamId::Two);
    assert!(!crlf.is_occupied(1, 2).unwrap());
}

#[test]
fn test_capture_onto_far_row_crowns_and_continues_backward() {
    let text = layout(&[(5, 2, 'b'), (6, 3, 'r'), (6, 5, 'r'), (2, 1, 'r')]);
    let mut board = Board::from_layout(&text, TeamId::One).unwrap();

    board.select(5, 2).unwrap();
    let outcome = board.select(7, 4).unwrap();
    assert_eq!(
        outcome,
        SelectOutcome::Captured {
            from: Coord::new(5, 2),
            to: Coord::new(7, 4),
            captured: Coord::new(6, 3),
            promoted: true,
            chain_locked: true,
        }
    );
    assert!(board.piece_at(7, 4).unwrap().unwrap().is_king());
    assert_eq!(board.team_to_move(), TeamId::One);
    // the new king jumps backward over (6, 5)
    assert_eq!(
        marked(&board),
        vec![(Coord::new(5, 6), Marker::CaptureFrom(Coord::new(7, 4)))]
    );

    let outcome = board.select(5, 6).unwrap();
    assert_eq!(
        outcome,
        SelectOutcome::Captured {
            from: Coord::new(7, 4),
            to: Coord::new(5, 6),
            captured: Coord::new(6, 5),
            promoted: false,
            chain_locked: false,
        }
    );
    assert!(board.piece_at(5, 6).unwrap().unwrap().is_king());
    assert_eq!(board.remaining_count(TeamId::Two), 1);
    assert_eq!(board.team_to_move(), TeamId::Two);
    assert!(!board.capture_chain_locked());
}
