use tictactoe_engine::EngineError;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Board, Difficulty, Mark, evaluate, select_move};

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Won { mark: Mark, line: String },
    Draw,
    InProgress { suggested: usize },
}

/// Evaluates `board` and, while the game is open, asks the selector for `mark`'s move.
pub fn suggest(
    board: Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Verdict, EngineError> {
    if let Some(winning) = evaluate(board) {
        return Ok(Verdict::Won {
            mark: winning.mark,
            line: winning.line.to_string(),
        });
    }

    if board.is_full() {
        return Ok(Verdict::Draw);
    }

    let suggested = select_move(board, difficulty, mark, rng)?;
    Ok(Verdict::InProgress { suggested })
}

pub fn describe(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Won { mark, line } => format!("{} won on line {}", mark, line),
        Verdict::Draw => "draw".to_string(),
        Verdict::InProgress { suggested } => format!("in progress, play cell {}", suggested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_reports_winner() {
        let mut rng = SessionRng::new(42);
        let verdict = suggest(board("XXX/OO./..."), Mark::O, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(
            verdict,
            Verdict::Won {
                mark: Mark::X,
                line: "0-1-2".to_string()
            }
        );
        assert_eq!(describe(&verdict), "X won on line 0-1-2");
    }

    #[test]
    fn test_reports_draw() {
        let mut rng = SessionRng::new(42);
        let verdict = suggest(board("XOX/OXO/OXO"), Mark::X, Difficulty::Easy, &mut rng).unwrap();
        assert_eq!(verdict, Verdict::Draw);
    }

    #[test]
    fn test_suggests_block() {
        let mut rng = SessionRng::new(42);
        let verdict = suggest(board("XX./O../..."), Mark::O, Difficulty::Medium, &mut rng).unwrap();
        assert_eq!(verdict, Verdict::InProgress { suggested: 2 });
    }
}
