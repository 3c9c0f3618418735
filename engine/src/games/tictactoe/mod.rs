mod board;
mod bot_controller;
mod error;
mod evaluator;
mod game_state;
mod search;
mod types;
mod validate;
mod win_detector;

pub use board::{get_available_moves, Board, BOARD_SIZE, CELL_COUNT, CENTER, CORNERS};
pub use bot_controller::{calculate_minimax_move, calculate_move, select_move, BotInput};
pub use error::BoardError;
pub use evaluator::evaluate_board;
pub use game_state::TicTacToeGameState;
pub use search::{SearchOutcome, Searcher, DEFAULT_DEPTH_CUTOFF};
pub use types::{Difficulty, GameStatus, Mark};
pub use validate::validate_position;
pub use win_detector::{check_win, check_win_with_line, is_tie, Line, LINES};
