//! Automated players
//!
//! Guessers drive a [`Game`](crate::game::Game) through the same `guess`
//! entry point a human uses. They power the benchmark command.

mod frequency;
mod guesser;
mod round;

pub use frequency::{FrequencyGuesser, consistent_candidates, letter_counts};
pub use guesser::{Guesser, GuesserType, RandomGuesser};
pub use round::{RoundResult, play_round};
