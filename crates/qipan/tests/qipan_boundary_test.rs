//! Scenario tests for the four-operation text boundary.

use qipan::{BoardState, EngineConfig, GameInfo, MoveReport, Player, QipanGame, StatusKind};
use serde_json::Value;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("boundary output is JSON")
}

fn play_all(game: &mut QipanGame, moves: &[(i64, i64)]) -> Vec<Value> {
    moves.iter().map(|&(x, y)| parse(&game.make_move(x, y))).collect()
}

#[test]
fn test_fresh_game_info() {
    let game = QipanGame::new();
    let info: GameInfo = serde_json::from_str(&game.get_game_info()).unwrap();
    assert_eq!(info.turn, Player::PlayerA);
    assert_eq!(info.move_count, 0);
    assert_eq!(info.status, StatusKind::InProgress);
    assert_eq!(info.winner, None);
    assert_eq!(info.last_move, None);
    assert_eq!((info.rows, info.cols, info.win_length), (15, 15, 5));
}

#[test]
fn test_three_in_a_row_then_game_over() {
    let mut game = QipanGame::with_config(EngineConfig::tic_tac_toe());

    let reports = play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    for report in &reports[..4] {
        assert_eq!(report["result"], "accepted");
        assert_eq!(report["status"], "in_progress");
    }
    let winning = &reports[4];
    assert_eq!(winning["result"], "accepted");
    assert_eq!(winning["status"], "won");
    assert_eq!(winning["winner"], "player_a");

    let rejected = parse(&game.make_move(1, 2));
    assert_eq!(rejected["result"], "rejected");
    assert_eq!(rejected["error"], "game_already_over");

    let info = parse(&game.get_game_info());
    assert_eq!(info["status"], "won");
    assert_eq!(info["winner"], "player_a");
    assert_eq!(info["move_count"], 5);
    assert_eq!(info["stones"]["player_a"], 3);
    assert_eq!(info["stones"]["player_b"], 2);
}

#[test]
fn test_full_board_without_line_is_drawn() {
    let mut game = QipanGame::with_config(EngineConfig::tic_tac_toe());
    let reports = play_all(
        &mut game,
        &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)],
    );
    assert!(reports.iter().all(|r| r["result"] == "accepted"));
    assert_eq!(reports[8]["status"], "drawn");
    assert_eq!(reports[8]["winner"], Value::Null);

    let board = parse(&game.get_board_state());
    assert_eq!(board["cells"], serde_json::json!(["XOX", "XOO", "OXX"]));

    let rejected = parse(&game.make_move(0, 0));
    assert_eq!(rejected["error"], "game_already_over");
}

#[test]
fn test_line_that_fills_board_is_a_win() {
    let mut game = QipanGame::with_config(EngineConfig::tic_tac_toe());
    let reports = play_all(
        &mut game,
        &[(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (0, 2), (1, 2), (2, 1), (2, 2)],
    );
    let last = &reports[8];
    assert_eq!(last["status"], "won");
    assert_eq!(last["winner"], "player_a");
    assert!(game.engine().board().is_full());
}

#[test]
fn test_rejections_leave_state_unchanged() {
    let mut game = QipanGame::with_config(EngineConfig::tic_tac_toe());
    game.make_move(1, 1);
    let board = game.get_board_state();
    let info = game.get_game_info();

    for (x, y, code) in [
        (3, 0, "out_of_bounds"),
        (0, -1, "out_of_bounds"),
        (i64::MAX, i64::MIN, "out_of_bounds"),
        (1, 1, "cell_occupied"),
    ] {
        let report: MoveReport = serde_json::from_str(&game.make_move(x, y)).unwrap();
        match report {
            MoveReport::Rejected { error, .. } => assert_eq!(error, code),
            MoveReport::Accepted { .. } => panic!("({x}, {y}) should be rejected"),
        }
        assert_eq!(game.get_board_state(), board);
        assert_eq!(game.get_game_info(), info);
    }
}

#[test]
fn test_board_state_decodes_to_engine_board() {
    let mut game = QipanGame::with_config(EngineConfig::new(5, 7, 4).unwrap());
    play_all(&mut game, &[(6, 4), (0, 0), (3, 2), (3, 3)]);
    let decoded = BoardState::decode(&game.get_board_state()).unwrap();
    assert_eq!(&decoded, game.engine().board());
}

#[test]
fn test_reset_restores_initial_state() {
    let config = EngineConfig::tic_tac_toe();
    let mut game = QipanGame::with_config(config);
    play_all(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    game.reset();
    assert_eq!(game, QipanGame::with_config(config));
    assert_eq!(
        game.get_game_info(),
        QipanGame::with_config(config).get_game_info()
    );
    assert_eq!(parse(&game.make_move(0, 0))["result"], "accepted");
}
