use super::board::Board;
use super::error::BoardError;
use super::types::Mark;
use super::win_detector::LINES;

/// Checks that `board` can arise from alternating play, whichever side
/// opened. The search itself never calls this.
pub fn validate_position(board: &Board) -> Result<(), BoardError> {
    let x = board.count(Mark::X);
    let o = board.count(Mark::O);
    if x.abs_diff(o) > 1 {
        return Err(BoardError::UnbalancedMarks { x, o });
    }

    let holds_line = |mark: Mark| {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.cells()[i] == mark))
    };
    if holds_line(Mark::X) && holds_line(Mark::O) {
        return Err(BoardError::BothPlayersWon);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(text: &str) -> Result<(), BoardError> {
        validate_position(&Board::parse(text).unwrap())
    }

    #[test]
    fn test_accepts_reachable_positions() {
        assert_eq!(validate("_________"), Ok(()));
        assert_eq!(validate("____O____"), Ok(()));
        assert_eq!(validate("XX_OO____"), Ok(()));
        assert_eq!(validate("XOXOXOXOX"), Ok(()));
    }

    #[test]
    fn test_rejects_unbalanced_counts() {
        assert_eq!(
            validate("XXX______"),
            Err(BoardError::UnbalancedMarks { x: 3, o: 0 })
        );
    }

    #[test]
    fn test_rejects_two_winners() {
        assert_eq!(validate("XXXOOO___"), Err(BoardError::BothPlayersWon));
    }
}
