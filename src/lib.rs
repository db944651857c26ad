//! Hangman
//!
//! A single-player word-guessing game: a hidden word is drawn from a
//! difficulty-filtered catalog and the player guesses letters until the word
//! is revealed or six wrong guesses are made.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::catalog::Catalog;
//! use hangman::game::{Game, GuessOutcome};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut game = Game::new(&catalog, StdRng::seed_from_u64(7));
//!
//! let outcome = game.guess('e');
//! assert!(outcome.is_recorded());
//! assert_eq!(game.guess('e'), GuessOutcome::AlreadyGuessed);
//! println!("{}", game.view().masked());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Difficulty-bucketed word catalog
pub mod catalog;

// Game state engine
pub mod game;

// Automated players
pub mod autoplay;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
