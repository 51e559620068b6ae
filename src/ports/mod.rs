//! Ports (trait boundaries) between the session layer and the players.
//!
//! The controller only sees the [`Strategy`] trait; the random, heuristic
//! and minimax players in [`crate::strategies`] are adapters implementing it.

pub mod strategy;

pub use strategy::Strategy;
