use crate::games::RandomSource;
use super::board::{get_available_moves, Board};
use super::game_state::TicTacToeGameState;
use super::search::{Searcher, DEFAULT_DEPTH_CUTOFF};
use super::types::{Difficulty, Mark};

/// Share of `Blended` calls answered with a random move.
const BLENDED_RANDOM_CHANCE: f64 = 0.5;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub depth_cutoff: usize,
}

impl BotInput {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            bot_mark: Mark::X,
            depth_cutoff: DEFAULT_DEPTH_CUTOFF,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState, depth_cutoff: usize) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
            depth_cutoff,
        }
    }
}

/// Picks a cell for X on `board`. `None` means the board is full.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    calculate_move(difficulty, &BotInput::new(*board), rng)
}

pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut impl RandomSource,
) -> Option<usize> {
    if input.board.is_full() {
        return None;
    }

    match difficulty {
        Difficulty::Random => calculate_random_move(&input.board, rng),
        Difficulty::Blended => {
            if rng.unit() < BLENDED_RANDOM_CHANCE {
                calculate_random_move(&input.board, rng)
            } else {
                calculate_minimax_move(input)
            }
        }
        Difficulty::Optimal => calculate_minimax_move(input),
    }
}

fn calculate_random_move(board: &Board, rng: &mut impl RandomSource) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.pick_index(available_moves.len())])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    Searcher::new(input.bot_mark)
        .with_depth_cutoff(input.depth_cutoff)
        .search(&input.board)
        .best_move
}
