//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear rules.

mod difficulty;
mod letter;
mod word;

pub use difficulty::{Difficulty, ParseDifficultyError};
pub use letter::{ALPHABET, is_guessable, normalize_key};
pub use word::{Word, WordError};
