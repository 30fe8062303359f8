use tictactoe_engine::EngineError;
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Difficulty, Mark, Score, TicTacToeGameState};
use tictactoe_engine::log;

pub struct MatchSettings {
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub games: u32,
}

pub fn run_match(settings: &MatchSettings, rng: &mut SessionRng) -> Result<Score, EngineError> {
    let mut score = Score::new();
    let mut state = TicTacToeGameState::new();

    for game in 1..=settings.games {
        state.reset();
        let mut moves = Vec::with_capacity(9);

        while !state.status().is_over() {
            let difficulty = match state.current_mark() {
                Mark::O => settings.o_difficulty,
                _ => settings.x_difficulty,
            };
            moves.push(state.play_bot_move(difficulty, rng)?);
        }

        score.record(state.status());

        let line = state
            .winning_line()
            .map(|winning| format!(" on line {}", winning.line))
            .unwrap_or_default();
        log!(
            "Game {}/{}: {}{} after moves {:?}, final board {}",
            game,
            settings.games,
            state.status(),
            line,
            moves,
            state.board()
        );
    }

    Ok(score)
}
