//! Game sessions: who plays each side and the turn-by-turn state machine

pub mod controller;
pub mod mover;

pub use controller::{SessionState, StepOutcome, TurnController};
pub use mover::{MoverKind, SessionSetup};
