use super::board::{get_available_moves, Board};
use super::evaluator::evaluate_board;
use super::types::Mark;
use super::win_detector::{check_win, is_tie};

pub const DEFAULT_DEPTH_CUTOFF: usize = 5;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// `None` when the board has no empty cell.
    pub best_move: Option<usize>,
    pub score: i32,
    pub nodes_visited: u64,
}

/// Depth-limited minimax with alpha-beta pruning, maximizing for `bot_mark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    bot_mark: Mark,
    depth_cutoff: usize,
    pruning: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Mark::X)
    }
}

impl Searcher {
    pub fn new(bot_mark: Mark) -> Self {
        Self {
            bot_mark,
            depth_cutoff: DEFAULT_DEPTH_CUTOFF,
            pruning: true,
        }
    }

    pub fn with_depth_cutoff(mut self, depth_cutoff: usize) -> Self {
        self.depth_cutoff = depth_cutoff;
        self
    }

    /// Alpha-beta only changes how many nodes are visited, never the result.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn bot_mark(&self) -> Mark {
        self.bot_mark
    }

    pub fn depth_cutoff(&self) -> usize {
        self.depth_cutoff
    }

    /// Tries every empty cell for the bot and keeps the first one with the
    /// highest score.
    pub fn search(&self, board: &Board) -> SearchOutcome {
        let mut nodes_visited = 0;
        let Some(opponent_mark) = self.bot_mark.opponent() else {
            return SearchOutcome {
                best_move: None,
                score: 0,
                nodes_visited,
            };
        };

        let mut board = *board;
        let available_moves = get_available_moves(&board);

        if available_moves.is_empty() {
            let score = self.minimax(
                &mut board,
                opponent_mark,
                0,
                false,
                i32::MIN,
                i32::MAX,
                &mut nodes_visited,
            );
            return SearchOutcome {
                best_move: None,
                score,
                nodes_visited,
            };
        }

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for index in available_moves {
            board.set(index, self.bot_mark);
            let score = self.minimax(
                &mut board,
                opponent_mark,
                0,
                false,
                i32::MIN,
                i32::MAX,
                &mut nodes_visited,
            );
            board.set(index, Mark::Empty);

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        SearchOutcome {
            best_move,
            score: best_score,
            nodes_visited,
        }
    }

    fn minimax(
        &self,
        board: &mut Board,
        opponent_mark: Mark,
        depth: usize,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes_visited: &mut u64,
    ) -> i32 {
        *nodes_visited += 1;

        if let Some(winner) = check_win(board) {
            return if winner == self.bot_mark {
                WIN_SCORE - depth as i32
            } else {
                depth as i32 - WIN_SCORE
            };
        }

        if is_tie(board) {
            return 0;
        }

        if depth >= self.depth_cutoff {
            return evaluate_board(board, self.bot_mark);
        }

        let moves = get_available_moves(board);

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for index in moves {
                board.set(index, self.bot_mark);
                let eval = self.minimax(
                    board,
                    opponent_mark,
                    depth + 1,
                    false,
                    alpha,
                    beta,
                    nodes_visited,
                );
                board.set(index, Mark::Empty);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for index in moves {
                board.set(index, opponent_mark);
                let eval = self.minimax(
                    board,
                    opponent_mark,
                    depth + 1,
                    true,
                    alpha,
                    beta,
                    nodes_visited,
                );
                board.set(index, Mark::Empty);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn best_move(text: &str) -> Option<usize> {
        Searcher::default()
            .search(&Board::parse(text).unwrap())
            .best_move
    }

    #[test]
    fn test_takes_immediate_win() {
        let outcome = Searcher::default().search(&Board::parse("XX_OO____").unwrap());
        assert_eq!(outcome.best_move, Some(2));
        assert_eq!(outcome.score, 10);
    }

    #[test]
    fn test_blocks_opponent_win() {
        assert_eq!(best_move("X_O__O_X_"), Some(8));
        assert_eq!(best_move("OO__X____"), Some(2));
    }

    #[test]
    fn test_opens_in_center() {
        assert_eq!(best_move("_________"), Some(4));
    }

    #[test]
    fn test_known_replies() {
        let cases = [
            ("X___O____", 1),
            ("XO__X___O", 3),
            ("__O_X____", 0),
            ("O___X____", 1),
            ("O___X___O", 1),
        ];
        for (text, expected) in cases {
            assert_eq!(best_move(text), Some(expected), "board {}", text);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let outcome = Searcher::default().search(&Board::parse("XOXOXOXOX").unwrap());
        assert_eq!(outcome.best_move, None);
        assert_eq!(outcome.score, 10);

        let drawn = Searcher::default().search(&Board::parse("XOXXOOOXX").unwrap());
        assert_eq!(drawn.best_move, None);
        assert_eq!(drawn.score, 0);
    }

    #[test]
    fn test_zero_cutoff_scores_children_statically() {
        let outcome = Searcher::default()
            .with_depth_cutoff(0)
            .search(&Board::new());
        assert_eq!(outcome.best_move, Some(4));
        assert_eq!(outcome.score, 13);
    }

    #[test]
    fn test_prefers_faster_win() {
        // X wins at once on 2; the slower wins score lower.
        let outcome = Searcher::default().search(&Board::parse("XX_O_O___").unwrap());
        assert_eq!(outcome.best_move, Some(2));
        assert_eq!(outcome.score, WIN_SCORE);
    }

    #[test]
    fn test_pruning_does_not_change_result() {
        let boards = [
            "_________",
            "____X____",
            "X___O____",
            "XO__X___O",
            "XX_OO____",
            "O___X___O",
            "_X__O__X_",
            "OX_X_O___",
        ];
        for text in boards {
            let board = Board::parse(text).unwrap();
            for depth_cutoff in [0, 2, DEFAULT_DEPTH_CUTOFF, 9] {
                let pruned = Searcher::default()
                    .with_depth_cutoff(depth_cutoff)
                    .search(&board);
                let full = Searcher::default()
                    .with_depth_cutoff(depth_cutoff)
                    .with_pruning(false)
                    .search(&board);
                assert_eq!(pruned.score, full.score, "board {} depth {}", text, depth_cutoff);
                assert_eq!(pruned.best_move, full.best_move, "board {} depth {}", text, depth_cutoff);
                assert!(pruned.nodes_visited <= full.nodes_visited);
            }
        }
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_on_open_board() {
        let board = Board::new();
        let pruned = Searcher::default().search(&board);
        let full = Searcher::default().with_pruning(false).search(&board);
        assert!(pruned.nodes_visited < full.nodes_visited);
    }

    #[test]
    fn test_searches_for_o() {
        let outcome = Searcher::new(Mark::O).search(&Board::parse("XX_OO____").unwrap());
        assert_eq!(outcome.best_move, Some(5));
        assert_eq!(outcome.score, 10);
    }

    #[test]
    fn test_empty_bot_mark_has_no_move() {
        let outcome = Searcher::new(Mark::Empty).search(&Board::new());
        assert_eq!(outcome.best_move, None);
    }
}
