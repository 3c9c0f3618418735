use super::board::Board;
use super::types::Mark;

pub type Line = [usize; 3];

pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// First line (in `LINES` order) held entirely by one mark.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some((mark, line))
        } else {
            None
        }
    })
}

pub fn is_tie(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}
