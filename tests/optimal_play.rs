use tictactoe::search::Searcher;
use tictactoe::{
    AIEngine, Board, Difficulty, GameMode, GameOutcome, GameState, Player, PlayerKind, Pos,
    Session,
};

/// Every line of play against `hard`, with the opponent trying all legal moves.
/// Counts (hard wins, draws) over the leaves in `tally` and panics on any loss.
fn explore(state: &mut GameState, engine: &mut AIEngine, hard: Player, tally: &mut (u32, u32)) {
    match state.outcome() {
        GameOutcome::Win(winner) => {
            assert_eq!(
                winner,
                hard,
                "optimal player lost:\n{}",
                state.board()
            );
            tally.0 += 1;
            return;
        }
        GameOutcome::Draw => {
            tally.1 += 1;
            return;
        }
        GameOutcome::InProgress => {}
    }

    if state.current_player() == hard {
        let pos = engine
            .get_move(state.board(), hard)
            .expect("open board must have a move");
        state.apply_move(pos).expect("optimal move must be legal");
        explore(state, engine, hard, tally);
        assert!(state.undo());
    } else {
        for pos in Pos::all() {
            if state.board().is_empty(pos) {
                state.apply_move(pos).unwrap();
                explore(state, engine, hard, tally);
                assert!(state.undo());
            }
        }
    }
}

#[test]
fn test_hard_never_loses_as_x() {
    let mut state = GameState::new();
    let mut engine = AIEngine::with_seed(Difficulty::Hard, 0);
    let mut tally = (0, 0);
    explore(&mut state, &mut engine, Player::One, &mut tally);
    assert!(tally.0 > 0, "should punish some mistakes");
    assert!(tally.1 > 0);
    assert!(state.board().is_board_empty());
}

#[test]
fn test_hard_never_loses_as_o() {
    let mut state = GameState::new();
    let mut engine = AIEngine::with_seed(Difficulty::Hard, 0);
    let mut tally = (0, 0);
    explore(&mut state, &mut engine, Player::Two, &mut tally);
    assert!(tally.0 > 0);
    assert!(tally.1 > 0);
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let mut session = Session::with_seed(
        GameMode::PvC,
        PlayerKind::Computer,
        PlayerKind::Computer,
        Difficulty::Hard,
        4,
    );
    while let Some(pos) = session.select_computer_move() {
        session
            .apply_move(pos.row as usize, pos.col as usize)
            .unwrap();
    }
    assert_eq!(session.outcome(), GameOutcome::Draw);
    assert!(session.board().is_full());
    assert_eq!(session.games().len(), 1);
}

#[test]
fn test_hard_beats_or_draws_medium() {
    for seed in 0..20 {
        for hard_side in [Player::One, Player::Two] {
            let mut hard = AIEngine::with_seed(Difficulty::Hard, seed);
            let mut medium = AIEngine::with_seed(Difficulty::Medium, seed);
            let mut state = GameState::new();

            while !state.is_game_over() {
                let player = state.current_player();
                let engine = if player == hard_side { &mut hard } else { &mut medium };
                let pos = engine.get_move(state.board(), player).unwrap();
                state.apply_move(pos).unwrap();
            }

            assert_ne!(
                state.outcome(),
                GameOutcome::Win(hard_side.opponent()),
                "seed {} lost:\n{}",
                seed,
                state.board()
            );
        }
    }
}

#[test]
fn test_first_row_win_scenario() {
    let mut session = Session::with_seed(
        GameMode::PvP,
        PlayerKind::Human,
        PlayerKind::Human,
        Difficulty::Hard,
        0,
    );
    for (r, c) in [(0, 0), (2, 2), (0, 1), (2, 0), (0, 2)] {
        session.apply_move(r, c).unwrap();
    }
    assert_eq!(session.outcome(), GameOutcome::Win(Player::One));
    assert_eq!(
        session.winning_cells(),
        &[Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
    );
    assert_eq!(session.scores().wins(Player::One), 1);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut state = GameState::new();
    // X O X
    // X O O
    // O X X
    for (r, c) in [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        state.apply_move(Pos::new(r, c)).unwrap();
    }
    assert_eq!(state.outcome(), GameOutcome::Draw);
    assert!(state.winning_cells().is_empty());
}

#[test]
fn test_optimal_completes_open_pair() {
    let cases = [
        (["XX.", "OO.", "..."], Pos::new(0, 2)),
        (["X.O", "XO.", "..."], Pos::new(2, 0)),
        (["OX.", ".X.", "O.."], Pos::new(2, 1)),
    ];
    for (rows, expected) in cases {
        let board = Board::from_rows(rows);
        let result = Searcher::new().search(&board, Player::One);
        assert_eq!(result.best_move, Some(expected), "board {:?}", rows);
    }
}

#[test]
fn test_optimal_blocks_when_it_cannot_win() {
    let board = Board::from_rows(["OO.", "X..", "..X"]);
    let result = Searcher::new().search(&board, Player::One);
    assert_eq!(result.best_move, Some(Pos::new(0, 2)));
}
