use crate::EngineError;
use crate::games::SessionRng;
use super::board::Board;
use super::bot_controller::select_move;
use super::types::{Difficulty, GameStatus, Mark, WinningLine};
use super::win_detector::evaluate;

/// Authoritative board and turn order for one game. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }

        match self.board.get(index) {
            None => return Err(EngineError::OutOfBounds { index }),
            Some(Mark::Empty) => {}
            Some(_) => return Err(EngineError::CellOccupied { index }),
        }

        self.board.set(index, self.current_mark)?;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(self.status)
    }

    /// Lets the selector choose for the mark to move and applies its choice.
    pub fn play_bot_move(
        &mut self,
        difficulty: Difficulty,
        rng: &mut SessionRng,
    ) -> Result<usize, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::GameOver);
        }
        let index = select_move(self.board, difficulty, self.current_mark, rng)?;
        self.place_mark(index)?;
        Ok(index)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winning) = evaluate(self.board)
            && let Some(status) = GameStatus::won_by(winning.mark)
        {
            self.status = status;
            self.winning_line = Some(winning);
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
