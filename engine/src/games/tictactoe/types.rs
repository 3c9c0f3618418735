use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '_',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Mark, BoardError> {
        match symbol {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            '_' | '.' | '-' | ' ' => Ok(Mark::Empty),
            other => Err(BoardError::InvalidCell(other)),
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// How hard the engine tries. The external names `easy`, `medium` and `hard`
/// are accepted alongside the tier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    #[serde(alias = "easy")]
    Random,
    #[serde(alias = "medium")]
    Blended,
    #[serde(alias = "hard")]
    Optimal,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Random => "random",
            Difficulty::Blended => "blended",
            Difficulty::Optimal => "optimal",
        }
    }
}

impl FromStr for Difficulty {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(Difficulty::Random),
            "medium" | "blended" => Ok(Difficulty::Blended),
            "hard" | "optimal" => Ok(Difficulty::Optimal),
            _ => Err(BoardError::UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
