//! Static scoring of positions where the search stops before the game ends.
//!
//! Offense is weighted above defense: two-in-a-line for the bot scores +10
//! while the same threat for the opponent costs only -8, and a lone mark
//! scores +2 against -1. These weights decide moves beyond the search
//! horizon, so they must stay exactly as they are.

use super::board::{Board, CENTER, CORNERS};
use super::types::Mark;
use super::win_detector::LINES;

const NEAR_WIN: i32 = 10;
const NEAR_LOSS: i32 = -8;
const OWN_TEMPO: i32 = 2;
const OPPONENT_TEMPO: i32 = -1;
const CENTER_BONUS: i32 = 5;
const CORNER_BONUS: i32 = 2;

/// Positive scores favour `bot_mark`, negative scores its opponent.
pub fn evaluate_board(board: &Board, bot_mark: Mark) -> i32 {
    let line_score: i32 = LINES
        .iter()
        .map(|line| score_line(board, line, bot_mark))
        .sum();

    let corner_score: i32 = CORNERS
        .iter()
        .map(|&corner| positional_bonus(board, corner, bot_mark, CORNER_BONUS))
        .sum();

    line_score + positional_bonus(board, CENTER, bot_mark, CENTER_BONUS) + corner_score
}

fn score_line(board: &Board, line: &[usize; 3], bot_mark: Mark) -> i32 {
    let mut bot_count = 0;
    let mut opp_count = 0;
    let mut empty_count = 0;

    for &index in line {
        match board.cells()[index] {
            Mark::Empty => empty_count += 1,
            m if m == bot_mark => bot_count += 1,
            _ => opp_count += 1,
        }
    }

    match (bot_count, opp_count, empty_count) {
        (2, 0, 1) => NEAR_WIN,
        (0, 2, 1) => NEAR_LOSS,
        (1, 0, 2) => OWN_TEMPO,
        (0, 1, 2) => OPPONENT_TEMPO,
        _ => 0,
    }
}

fn positional_bonus(board: &Board, index: usize, bot_mark: Mark, bonus: i32) -> i32 {
    match board.cells()[index] {
        Mark::Empty => 0,
        m if m == bot_mark => bonus,
        _ => -bonus,
    }
}
