use super::board::CELL_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidLength { found: usize },
    InvalidCell(char),
    UnknownDifficulty(String),
    OutOfBounds(usize),
    CellOccupied(usize),
    GameOver,
    UnbalancedMarks { x: usize, o: usize },
    BothPlayersWon,
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::InvalidLength { found } => {
                write!(f, "Board must have {} cells, found {}", CELL_COUNT, found)
            }
            BoardError::InvalidCell(symbol) => write!(f, "Invalid cell symbol: {:?}", symbol),
            BoardError::UnknownDifficulty(name) => write!(f, "Unknown difficulty: {}", name),
            BoardError::OutOfBounds(index) => {
                write!(f, "Cell {} is out of range 0-{}", index, CELL_COUNT - 1)
            }
            BoardError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            BoardError::GameOver => write!(f, "Game is already over"),
            BoardError::UnbalancedMarks { x, o } => {
                write!(f, "Impossible mark counts: {} X against {} O", x, o)
            }
            BoardError::BothPlayersWon => write!(f, "Both players hold a winning line"),
        }
    }
}

impl std::error::Error for BoardError {}
