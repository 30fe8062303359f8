mod config;
mod match_runner;
mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::games::tictactoe::{Board, Difficulty, Mark};
use tictactoe_engine::{log, logger};

use match_runner::{MatchSettings, run_match};

#[derive(Parser)]
#[command(name = "tictactoe_cli", about = "Tic-tac-toe engine front end")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Emit debug lines, including the hard tier's scores.
    #[arg(long)]
    verbose: bool,

    /// Config file; defaults to tictactoe_cli_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play automated games between two difficulty tiers.
    Match {
        #[arg(long)]
        x: Option<Difficulty>,
        #[arg(long)]
        o: Option<Difficulty>,
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate a board like "XX./OO./..." and pick a move for the given mark.
    Suggest {
        board: Board,
        #[arg(long)]
        mark: Mark,
        #[arg(long, default_value = "hard")]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    match args.command {
        Command::Match { x, o, games, seed } => {
            let cfg = config::get_config_manager(args.config)
                .get_config()?
                .with_overrides(x, o, games, seed)?;
            let settings = MatchSettings {
                x_difficulty: cfg.x_difficulty,
                o_difficulty: cfg.o_difficulty,
                games: cfg.games,
            };

            let mut rng = session_rng(cfg.seed);
            log!(
                "Starting match: X={} vs O={}, {} games, seed {}",
                settings.x_difficulty,
                settings.o_difficulty,
                settings.games,
                rng.seed()
            );

            let score = run_match(&settings, &mut rng)?;

            log!("Match finished: {}", score);
            println!("{}", score);
        }
        Command::Suggest {
            board,
            mark,
            difficulty,
            seed,
        } => {
            let mut rng = session_rng(seed);
            log!("Evaluating {} for {} on {}", board, mark, difficulty);

            let verdict = suggest::suggest(board, mark, difficulty, &mut rng)?;
            println!("{}", suggest::describe(&verdict));
        }
    }

    Ok(())
}
