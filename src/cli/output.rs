//! Prompts and messages printed by the game loop

use crate::{session::MoverKind, tictactoe::GameStatus};

pub const COMMAND_PROMPT: &str = "Input command:";
pub const COORDINATES_PROMPT: &str = "Enter the coordinates:";

/// Announcement printed before a computer move
pub fn computer_move(kind: MoverKind) -> String {
    format!("Making move level \"{}\"", kind.token())
}

/// `X wins`, `O wins` or `Draw`; nothing while the game is on
pub fn status_message(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::Won(player) => Some(format!("{player} wins")),
        GameStatus::Draw => Some("Draw".to_string()),
        GameStatus::Ongoing => None,
    }
}
