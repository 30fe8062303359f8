mod board;
mod bot_controller;
mod game_state;
mod score;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{easy_move, hard_move, medium_move, minimax_score, select_move};
pub use game_state::TicTacToeGameState;
pub use score::Score;
pub use types::{Difficulty, GameStatus, Line, Mark, WinningLine};
pub use win_detector::{LINES, evaluate, winner};
