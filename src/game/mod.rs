//! Hangman game engine
//!
//! A [`Game`] owns one round: difficulty, target word and guessed letters.
//! Everything else (wrong guesses, win, loss) is derived on demand.

mod engine;
mod view;

pub use engine::{Game, GuessOutcome, MAX_INCORRECT_GUESSES, Status};
pub use view::{GameView, KeyState};
