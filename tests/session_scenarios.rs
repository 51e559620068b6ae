//! End-to-end console sessions driven through in-memory input and output.

use std::io::Cursor;

use tictactoe_ai::{
    app::EngineConfig,
    cli::Repl,
    session::SessionState,
    tictactoe::{Board, GameStatus, Player},
};

fn play(input: &str, config: EngineConfig) -> (String, SessionState, Board) {
    let mut repl = Repl::new(Cursor::new(input.to_string()), Vec::new(), config);
    repl.run().unwrap();
    let state = repl.controller().state();
    let board = *repl.controller().board();
    (String::from_utf8(repl.into_output()).unwrap(), state, board)
}

#[test]
fn out_of_range_coordinates_leave_the_board_alone() {
    let (out, state, board) = play("start user hard\n4 1\n", EngineConfig::new().with_seed(2));
    assert!(out.contains("Coordinates should be from 1 to 3!"));
    assert!(!out.contains("Making move"));
    assert_eq!(state, SessionState::InProgress);
    assert_eq!(board, Board::new());
}

#[test]
fn human_against_hard_full_transcript() {
    let config = EngineConfig::new()
        .with_seed(0)
        .with_tie_break(tictactoe_ai::strategies::TieBreak::LowestIndex);
    // X opens in the centre; hard answers in the lowest-index corner
    let (out, _, board) = play("start user hard\n2 2\n", config);

    let expected = "\
Input command:
---------
|       |
|       |
|       |
---------
Enter the coordinates:
---------
|       |
|   X   |
|       |
---------
Making move level \"hard\"
---------
| O     |
|   X   |
|       |
---------
Enter the coordinates:
";
    assert_eq!(out, expected);
    assert_eq!(board.to_canonical_string(), "O___X____");
}

#[test]
fn medium_blocks_from_configured_start() {
    // X X _
    // O _ _
    // _ _ _   O to move
    let config = EngineConfig::new().with_seed(8).with_start_board("XX_O_____");
    let (out, state, board) = play("start user medium\n", config);
    assert!(out.contains("Making move level \"medium\""));
    assert!(out.contains("| X X O |"));
    assert_eq!(board.to_canonical_string(), "XXOO_____");
    assert_eq!(state, SessionState::InProgress);
}

#[test]
fn two_humans_play_to_a_draw() {
    // X O X
    // X O O
    // O X X
    let input = "start user user\n1 3\n2 3\n3 3\n2 2\n1 2\n3 2\n2 1\n1 1\n3 1\nexit\n";
    let (out, state, board) = play(input, EngineConfig::new());
    assert_eq!(board.to_canonical_string(), "XOXXOOOXX");
    assert_eq!(state, SessionState::Terminal(GameStatus::Draw));
    assert!(out.contains("\nDraw\n"));
    assert!(out.ends_with("Input command:\n"));
}

#[test]
fn two_humans_play_to_a_win() {
    let input = "start user user\n1 3\n1 2\n2 3\n2 2\n3 3\n";
    let (out, state, _) = play(input, EngineConfig::new());
    assert_eq!(state, SessionState::Terminal(GameStatus::Won(Player::X)));
    assert!(out.contains("X wins"));
}

#[test]
fn new_game_after_finish() {
    let input = "start user user\n1 3\n1 2\n2 3\n2 2\n3 3\nstart easy easy\nexit\n";
    let (out, state, _) = play(input, EngineConfig::new().with_seed(1));
    assert!(out.contains("X wins"));
    assert_eq!(out.matches("Input command:").count(), 3);
    assert!(matches!(state, SessionState::Terminal(_)));
}

#[test]
fn computer_games_finish_for_every_level_pair() {
    let levels = ["easy", "medium", "hard"];
    for first in levels {
        for second in levels {
            let input = format!("start {first} {second}\nexit\n");
            let (out, state, board) = play(&input, EngineConfig::new().with_seed(21));
            assert!(matches!(state, SessionState::Terminal(_)), "{first} vs {second}");
            assert!(out.contains(&format!("Making move level \"{first}\"")));
            assert!(board.is_terminal());
        }
    }
}
