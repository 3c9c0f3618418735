mod console_game;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use console_game::{GameSettings, ENGINE_MARK};
use tictactoe_engine::config::get_config_manager;
use tictactoe_engine::games::tictactoe::{calculate_move, validate_position, Board, BotInput, Difficulty};
use tictactoe_engine::games::SessionRng;
use tictactoe_engine::{log, log_error, logger};

#[derive(Parser)]
#[command(name = "tictactoe_cli", about = "Play tic-tac-toe against the engine")]
struct Args {
    /// easy, medium, hard (or random, blended, optimal)
    #[arg(long)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    engine_first: bool,

    /// Nine cells row by row, e.g. "XX_OO____". Prints the engine's move and exits.
    #[arg(long)]
    board: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Engine".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(args.config).get_config()?;
    let difficulty = args.difficulty.unwrap_or(config.difficulty);
    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    log!(
        "{} ready: difficulty {}, depth cutoff {}, seed {}",
        config.username,
        difficulty,
        config.depth_cutoff,
        rng.seed()
    );

    if let Some(text) = args.board {
        let board = match Board::parse(&text).and_then(|board| {
            validate_position(&board)?;
            Ok(board)
        }) {
            Ok(board) => board,
            Err(e) => {
                log_error!("Rejected board {:?}: {}", text, e);
                return Err(e.into());
            }
        };

        let input = BotInput {
            board,
            bot_mark: ENGINE_MARK,
            depth_cutoff: config.depth_cutoff,
        };
        match calculate_move(difficulty, &input, &mut rng) {
            Some(index) => println!("{}", index),
            None => println!("none"),
        }
        return Ok(());
    }

    let settings = GameSettings {
        username: config.username,
        difficulty,
        depth_cutoff: config.depth_cutoff,
        engine_first: args.engine_first,
    };
    let stdin = io::stdin();
    console_game::run(&settings, &mut rng, &mut stdin.lock(), &mut io::stdout())?;

    Ok(())
}
