use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Mark::Empty
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Mark {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(EngineError::InvalidMark {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

/// Three cell indices whose equal, non-empty occupation ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line(pub [usize; 3]);

impl Line {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{}-{}-{}", a, b, c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub line: Line,
}

impl WinningLine {
    pub fn new(mark: Mark, line: Line) -> Self {
        Self { mark, line }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub(crate) fn won_by(mark: Mark) -> Option<GameStatus> {
        match mark {
            Mark::X => Some(GameStatus::XWon),
            Mark::O => Some(GameStatus::OWon),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::InProgress => "in progress",
            GameStatus::XWon => "X won",
            GameStatus::OWon => "O won",
            GameStatus::Draw => "draw",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" Medium ".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!(matches!(
            "impossible".parse::<Difficulty>(),
            Err(EngineError::InvalidDifficulty { .. })
        ));
    }

    #[test]
    fn test_difficulty_display_parses_back() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(difficulty.to_string().parse::<Difficulty>().unwrap(), difficulty);
        }
    }

    #[test]
    fn test_mark_parse() {
        assert_eq!("x".parse::<Mark>().unwrap(), Mark::X);
        assert_eq!("O".parse::<Mark>().unwrap(), Mark::O);
        assert!("-".parse::<Mark>().is_err());
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::XWon.winner(), Some(Mark::X));
        assert_eq!(GameStatus::OWon.winner(), Some(Mark::O));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(!GameStatus::InProgress.is_over());
        assert!(GameStatus::Draw.is_over());
    }
}
