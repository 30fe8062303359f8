use std::fmt;

use super::types::GameStatus;

/// Running tally across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game; `InProgress` is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x += 1,
            GameStatus::OWon => self.o += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.x + self.o + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, O: {}, draws: {}", self.x, self.o, self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut score = Score::new();
        score.record(GameStatus::XWon);
        score.record(GameStatus::XWon);
        score.record(GameStatus::OWon);
        score.record(GameStatus::Draw);
        score.record(GameStatus::InProgress);
        assert_eq!(score, Score { x: 2, o: 1, draws: 1 });
        assert_eq!(score.total(), 4);
        assert_eq!(score.to_string(), "X: 2, O: 1, draws: 1");
    }

    #[test]
    fn test_reset_zeroes() {
        let mut score = Score { x: 3, o: 1, draws: 5 };
        score.reset();
        assert_eq!(score.total(), 0);
    }
}
