//! Computer players implementing [`crate::ports::Strategy`]
//!
//! - [`RandomStrategy`] ("easy"): uniform over empty cells
//! - [`HeuristicStrategy`] ("medium"): win, else block, else random
//! - [`MinimaxStrategy`] ("hard"): exhaustive minimax over a shared [`SearchCache`]

pub mod cache;
pub mod heuristic;
pub mod minimax;
pub mod random;

pub use cache::{CacheEntry, SearchCache, SharedSearchCache};
pub use heuristic::HeuristicStrategy;
pub use minimax::{MinimaxStrategy, TieBreak};
pub use random::RandomStrategy;
