use std::fmt;
use std::str::FromStr;

use super::error::BoardError;
use super::types::Mark;
use super::win_detector;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
pub const CENTER: usize = 4;
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Row-major 3x3 grid: cells 0,1,2 / 3,4,5 / 6,7,8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let symbols: Vec<char> = text.trim_end_matches(['\n', '\r']).chars().collect();
        Self::try_from(symbols.as_slice())
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Returns a copy of the board with `mark` placed on an empty cell.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Board, BoardError> {
        match self.get(index) {
            None => Err(BoardError::OutOfBounds(index)),
            Some(Mark::Empty) => {
                let mut next = *self;
                next.set(index, mark);
                Ok(next)
            }
            Some(_) => Err(BoardError::CellOccupied(index)),
        }
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(self)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn winner(&self) -> Option<Mark> {
        win_detector::check_win(self)
    }

    pub fn is_tie(&self) -> bool {
        win_detector::is_tie(self)
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

impl TryFrom<&[Mark]> for Board {
    type Error = BoardError;

    fn try_from(cells: &[Mark]) -> Result<Self, Self::Error> {
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidLength { found: cells.len() })?;
        Ok(Self { cells })
    }
}

impl TryFrom<&[char]> for Board {
    type Error = BoardError;

    fn try_from(symbols: &[char]) -> Result<Self, Self::Error> {
        if symbols.len() != CELL_COUNT {
            return Err(BoardError::InvalidLength {
                found: symbols.len(),
            });
        }
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (cell, &symbol) in cells.iter_mut().zip(symbols) {
            *cell = Mark::from_symbol(symbol)?;
        }
        Ok(Self { cells })
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::parse(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            writeln!(f, "{} | {} | {}", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_empty_aliases() {
        let board = Board::parse("X_.- o   ").unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(5), Some(Mark::O));
        assert_eq!(board.count(Mark::Empty), 7);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            Board::parse("XO"),
            Err(BoardError::InvalidLength { found: 2 })
        );
        assert_eq!(
            Board::parse("XOXOXOXOXO"),
            Err(BoardError::InvalidLength { found: 10 })
        );
    }

    #[test]
    fn test_parse_rejects_illegal_symbol() {
        assert_eq!(Board::parse("XOXOZOXOX"), Err(BoardError::InvalidCell('Z')));
    }

    #[test]
    fn test_try_from_marks_checks_length() {
        let marks = vec![Mark::Empty; 8];
        assert_eq!(
            Board::try_from(marks.as_slice()),
            Err(BoardError::InvalidLength { found: 8 })
        );
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let board = Board::parse("X___O___X").unwrap();
        assert_eq!(board.available_moves(), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.with_mark(4, Mark::O), Err(BoardError::CellOccupied(4)));
        assert_eq!(next.with_mark(9, Mark::O), Err(BoardError::OutOfBounds(9)));
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::parse("XO__X___O").unwrap();
        assert_eq!(
            board.to_string(),
            "X | O | _\n---------\n_ | X | _\n---------\n_ | _ | O\n"
        );
    }
}
