//! Line-oriented interface: commands, coordinate input and the game loop

pub mod command;
pub mod input;
pub mod output;
pub mod repl;

pub use command::{Command, CommandError};
pub use input::{CoordinateError, Coordinates};
pub use repl::Repl;
