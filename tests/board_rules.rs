//! Board encoding, turn order and terminal evaluation over the whole state space.

mod common;

use common::{board, reachable_boards};
use tictactoe_ai::{
    Error,
    tictactoe::{Board, Cell, GameStatus, LineAnalyzer, Player},
};

fn all_configurations() -> impl Iterator<Item = Board> {
    const CELLS: [Cell; 3] = [Cell::Empty, Cell::X, Cell::O];
    (0..3usize.pow(9)).map(|mut code| {
        let mut cells = [Cell::Empty; 9];
        for cell in cells.iter_mut() {
            *cell = CELLS[code % 3];
            code /= 3;
        }
        Board::from_cells(cells)
    })
}

#[test]
fn canonical_string_round_trips_for_every_configuration() {
    for b in all_configurations() {
        let encoded = b.to_canonical_string();
        assert_eq!(encoded.len(), 9);
        assert_eq!(Board::from_canonical(&encoded).unwrap(), b);
    }
}

#[test]
fn canonical_string_rejects_bad_input() {
    assert!(matches!(
        Board::from_canonical("XO"),
        Err(Error::InvalidBoardLength { got: 2, .. })
    ));
    assert!(matches!(
        Board::from_canonical("XO_Z_____"),
        Err(Error::InvalidCellCharacter {
            character: 'Z',
            position: 3,
            ..
        })
    ));
}

#[test]
fn turn_alternates_with_occupancy() {
    let mut b = Board::new();
    for (ply, cell) in [4, 0, 8, 2, 6, 3, 5, 7, 1].into_iter().enumerate() {
        let expected = if ply % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(b.next_player(), expected, "ply {ply}");
        assert_eq!(b.occupied_count(), ply);
        b = b.with_move(cell).unwrap();
    }
    assert!(b.is_full());
    assert_eq!(b.occupied_count(), 9);
    assert!(matches!(b.with_move(0), Err(Error::CellOccupied { position: 0 })));
}

#[test]
fn reachable_boards_have_at_most_one_winner() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    for b in &boards {
        let x_won = LineAnalyzer::has_won(b, Player::X);
        let o_won = LineAnalyzer::has_won(b, Player::O);
        assert!(!(x_won && o_won), "{}", b.to_canonical_string());

        let expected = match (x_won, o_won) {
            (true, _) => GameStatus::Won(Player::X),
            (_, true) => GameStatus::Won(Player::O),
            _ if b.is_full() => GameStatus::Draw,
            _ => GameStatus::Ongoing,
        };
        assert_eq!(b.status(), expected, "{}", b.to_canonical_string());
    }
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let b = board("XOXXOOOXX");
    assert_eq!(b.status(), GameStatus::Draw);
    assert!(b.is_terminal());
    assert_eq!(b.status().score_for(Player::X), Some(0));
}

#[test]
fn win_on_last_cell_is_not_a_draw() {
    // X O X
    // O X O
    // O X X
    let b = board("XOXOXOOXX");
    assert!(b.is_full());
    assert_eq!(b.status(), GameStatus::Won(Player::X));
}

#[test]
fn rendering_matches_grid_layout() {
    let b = board("XO__X___O");
    assert_eq!(
        b.to_string(),
        "---------\n| X O   |\n|   X   |\n|     O |\n---------"
    );
}
