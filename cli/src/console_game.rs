use std::io::{self, BufRead, Write};

use tictactoe_engine::games::tictactoe::{
    calculate_move, BotInput, Difficulty, GameStatus, Mark, TicTacToeGameState,
};
use tictactoe_engine::games::RandomSource;
use tictactoe_engine::log;

pub const ENGINE_MARK: Mark = Mark::X;
pub const HUMAN_MARK: Mark = Mark::O;

pub struct GameSettings {
    pub username: String,
    pub difficulty: Difficulty,
    pub depth_cutoff: usize,
    pub engine_first: bool,
}

/// Human (O) against the engine (X) over a line-based console.
/// Returns the final state; end of input abandons the game.
pub fn run<I: BufRead, O: Write>(
    settings: &GameSettings,
    rng: &mut impl RandomSource,
    input: &mut I,
    output: &mut O,
) -> io::Result<TicTacToeGameState> {
    let first_mark = if settings.engine_first { ENGINE_MARK } else { HUMAN_MARK };
    let mut state = TicTacToeGameState::new(first_mark);

    writeln!(output, "Welcome to Tic-Tac-Toe!")?;

    while !state.status.is_over() {
        write!(output, "{}", state.board)?;

        if state.current_mark == HUMAN_MARK {
            let Some(index) = read_human_move(&state, input, output)? else {
                writeln!(output, "No more input. Game abandoned.")?;
                return Ok(state);
            };
            if let Err(e) = state.place_mark(index) {
                writeln!(output, "{}. Try again.", e)?;
                continue;
            }
        } else {
            writeln!(output, "{} is making a move...", settings.username)?;
            let bot_input = BotInput::from_game_state(&state, settings.depth_cutoff);
            let Some(index) = calculate_move(settings.difficulty, &bot_input, rng) else {
                writeln!(output, "{} couldn't make a move. Game over.", settings.username)?;
                return Ok(state);
            };
            log!("{} plays {} at {} difficulty", settings.username, index, settings.difficulty);
            if let Err(e) = state.place_mark(index) {
                writeln!(output, "{} made an illegal move: {}", settings.username, e)?;
                return Ok(state);
            }
        }
    }

    write!(output, "{}", state.board)?;
    let verdict = match state.status {
        GameStatus::XWon => format!("{} wins!", settings.username),
        GameStatus::OWon => "You win!".to_string(),
        GameStatus::Draw | GameStatus::InProgress => "It's a tie!".to_string(),
    };
    writeln!(output, "{}", verdict)?;
    log!("Game finished: {:?}", state.status);

    Ok(state)
}

fn read_human_move<I: BufRead, O: Write>(
    state: &TicTacToeGameState,
    input: &mut I,
    output: &mut O,
) -> io::Result<Option<usize>> {
    loop {
        write!(output, "Enter your move (0-8): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(index) if state.board.is_empty_at(index) => return Ok(Some(index)),
            Ok(index) if index < 9 => writeln!(output, "Cell already occupied. Try again.")?,
            _ => writeln!(output, "Invalid input. Please enter a number between 0 and 8.")?,
        }
    }
}
