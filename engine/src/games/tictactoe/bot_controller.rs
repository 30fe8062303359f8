use crate::games::SessionRng;
use crate::{EngineError, log_debug};
use super::board::Board;
use super::types::{Difficulty, Mark};
use super::win_detector::winner;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

/// Picks the cell `moving_mark` plays next under the given difficulty.
///
/// Fails with [`EngineError::InvalidState`] when the board has no empty cell
/// or `moving_mark` is [`Mark::Empty`]. The returned index is always empty in `board`.
pub fn select_move(
    board: Board,
    difficulty: Difficulty,
    moving_mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    match difficulty {
        Difficulty::Easy => easy_move(board, moving_mark, rng),
        Difficulty::Medium => medium_move(board, moving_mark, rng),
        Difficulty::Hard => hard_move(board, moving_mark),
    }
}

pub fn easy_move(
    board: Board,
    moving_mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let available_moves = checked_moves(&board, moving_mark)?;
    random_move(&available_moves, rng)
}

/// Win if possible, else block, else random.
pub fn medium_move(
    board: Board,
    moving_mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, EngineError> {
    let available_moves = checked_moves(&board, moving_mark)?;
    let opponent_mark = opponent_of(moving_mark)?;

    if let Some(index) = find_winning_move(board, moving_mark, &available_moves) {
        return Ok(index);
    }

    if let Some(index) = find_winning_move(board, opponent_mark, &available_moves) {
        return Ok(index);
    }

    random_move(&available_moves, rng)
}

/// Exhaustive minimax. Ties keep the lowest index, so a slower win can beat a faster one.
pub fn hard_move(board: Board, moving_mark: Mark) -> Result<usize, EngineError> {
    let available_moves = checked_moves(&board, moving_mark)?;
    let opponent_mark = opponent_of(moving_mark)?;

    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for &index in &available_moves {
        let score = minimax(
            board.with_mark(index, moving_mark),
            moving_mark,
            opponent_mark,
            false,
        );
        if score > best_score {
            best_score = score;
            best_move = index;
        }
    }

    log_debug!(
        "hard move for {} on {}: cell {} scored {}",
        moving_mark, board, best_move, best_score
    );

    Ok(best_move)
}

/// Game-theoretic value of `board` from `moving_mark`'s side: +10, 0 or -10.
///
/// `is_maximizing` says whether `moving_mark` is the one to play on `board`.
pub fn minimax_score(
    board: Board,
    moving_mark: Mark,
    is_maximizing: bool,
) -> Result<i32, EngineError> {
    let opponent_mark = opponent_of(moving_mark)?;
    Ok(minimax(board, moving_mark, opponent_mark, is_maximizing))
}

fn minimax(board: Board, bot_mark: Mark, opponent_mark: Mark, is_maximizing: bool) -> i32 {
    match winner(board) {
        Some(mark) if mark == bot_mark => return WIN_SCORE,
        Some(_) => return LOSS_SCORE,
        None => {}
    }

    if board.is_full() {
        return DRAW_SCORE;
    }

    let moves = board.available_moves();

    if is_maximizing {
        moves
            .into_iter()
            .map(|index| {
                minimax(
                    board.with_mark(index, bot_mark),
                    bot_mark,
                    opponent_mark,
                    false,
                )
            })
            .max()
            .unwrap_or(DRAW_SCORE)
    } else {
        moves
            .into_iter()
            .map(|index| {
                minimax(
                    board.with_mark(index, opponent_mark),
                    bot_mark,
                    opponent_mark,
                    true,
                )
            })
            .min()
            .unwrap_or(DRAW_SCORE)
    }
}

fn find_winning_move(board: Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| winner(board.with_mark(index, mark)) == Some(mark))
}

fn random_move(moves: &[usize], rng: &mut SessionRng) -> Result<usize, EngineError> {
    rng.choose(moves)
        .ok_or_else(|| EngineError::invalid_state("no empty cell to play"))
}

fn checked_moves(board: &Board, moving_mark: Mark) -> Result<Vec<usize>, EngineError> {
    opponent_of(moving_mark)?;
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::invalid_state(format!(
            "board {} is full, there is no move to select",
            board
        )));
    }
    Ok(available_moves)
}

fn opponent_of(moving_mark: Mark) -> Result<Mark, EngineError> {
    moving_mark
        .opponent()
        .ok_or_else(|| EngineError::invalid_state("the moving mark must be X or O"))
}
