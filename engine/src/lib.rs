//! Move selection for an automated tic-tac-toe player: board predicates, a
//! static evaluator, depth-limited alpha-beta search and difficulty tiers.

pub mod config;
pub mod games;
pub mod logger;

pub use games::tictactoe::{select_move, Board, Difficulty, Mark};
pub use games::{RandomSource, SessionRng};
