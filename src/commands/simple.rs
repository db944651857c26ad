//! Simple line-based play mode
//!
//! Text-based hangman without the TUI. Reads one command per line.

use crate::core::{Difficulty, normalize_key};
use crate::game::{Game, GuessOutcome};
use crate::output::write_board;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// What a line of input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess(char),
    /// Blank line or `new`, same as Enter in the TUI
    NewRound,
    Difficulty(Difficulty),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    let mut chars = line.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Command::NewRound,
        (Some(key), None) => normalize_key(key).map_or(Command::Unknown, Command::Guess),
        _ => match line.as_str() {
            "quit" | "exit" => Command::Quit,
            "new" | "restart" => Command::NewRound,
            other => other
                .parse::<Difficulty>()
                .map_or(Command::Unknown, Command::Difficulty),
        },
    }
}

/// Run the simple interactive mode over any line source
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple<R: Rng, I: BufRead, O: Write>(
    game: &mut Game<'_, R>,
    input: I,
    mut output: O,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                     Hangman - Simple Mode                    ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Type a letter to guess it.")?;
    writeln!(output, "Commands: 'easy' / 'medium' / 'hard' to switch difficulty,")?;
    writeln!(output, "          Enter or 'new' for a new word, 'quit' to exit.")?;

    write_board(&mut output, &game.view())?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Guess(letter) => match game.guess(letter) {
                GuessOutcome::Correct | GuessOutcome::Incorrect => {
                    write_board(&mut output, &game.view())?;
                }
                GuessOutcome::AlreadyGuessed => {
                    writeln!(output, "You already guessed '{letter}'.")?;
                }
                GuessOutcome::GameOver => {
                    writeln!(output, "Round is over. Press Enter or type 'new' to play again.")?;
                }
                GuessOutcome::InvalidLetter => {}
            },
            Command::NewRound => {
                game.reset();
                write_board(&mut output, &game.view())?;
            }
            Command::Difficulty(difficulty) => {
                game.set_difficulty(difficulty);
                writeln!(output, "Difficulty set to {difficulty}.")?;
                write_board(&mut output, &game.view())?;
            }
            Command::Unknown => {
                writeln!(output, "Enter a single letter or a command.")?;
            }
        }
        prompt(&mut output)?;
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    info!("simple mode finished");
    Ok(())
}

fn prompt<O: Write>(output: &mut O) -> Result<()> {
    write!(output, "Guess: ")?;
    output.flush()?;
    Ok(())
}
