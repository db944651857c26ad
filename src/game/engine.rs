//! Round state and transitions

use crate::catalog::Catalog;
use crate::core::{Difficulty, Word, is_guessable};
use rand::Rng;
use tracing::debug;

/// Incorrect guesses that end a round in a loss
pub const MAX_INCORRECT_GUESSES: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    /// True once the round is won or lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What [`Game::guess`] did with a letter
///
/// Only `Correct` and `Incorrect` change state. The rest are silent no-ops,
/// reported for the caller's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Recorded; the letter is in the word
    Correct,
    /// Recorded; the letter is not in the word
    Incorrect,
    /// Ignored; the letter was guessed earlier this round
    AlreadyGuessed,
    /// Ignored; not a lowercase `a-z` letter
    InvalidLetter,
    /// Ignored; the round is already won or lost
    GameOver,
}

impl GuessOutcome {
    /// Whether the guess was appended to the guessed letters
    #[must_use]
    pub const fn is_recorded(self) -> bool {
        matches!(self, Self::Correct | Self::Incorrect)
    }
}

/// One hangman session
///
/// Owns the round state and the randomness used to draw words. The
/// catalog is borrowed and never changes.
#[derive(Debug, Clone)]
pub struct Game<'a, R> {
    catalog: &'a Catalog,
    rng: R,
    difficulty: Difficulty,
    target: &'a Word,
    guessed: Vec<char>,
}

impl<'a, R: Rng> Game<'a, R> {
    /// Start a session on the default (easy) difficulty
    ///
    /// # Examples
    /// ```
    /// use hangman::catalog::Catalog;
    /// use hangman::game::{Game, Status};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let catalog = Catalog::bundled().unwrap();
    /// let game = Game::new(&catalog, StdRng::seed_from_u64(1));
    /// assert_eq!(game.status(), Status::Playing);
    /// assert!(game.guessed_letters().is_empty());
    /// ```
    pub fn new(catalog: &'a Catalog, rng: R) -> Self {
        Self::with_difficulty(catalog, rng, Difficulty::default())
    }

    /// Start a session on a chosen difficulty
    pub fn with_difficulty(catalog: &'a Catalog, mut rng: R, difficulty: Difficulty) -> Self {
        let target = catalog.select_word(difficulty, &mut rng);
        debug!(%difficulty, len = target.len(), "new round");
        Self {
            catalog,
            rng,
            difficulty,
            target,
            guessed: Vec::new(),
        }
    }

    /// Submit a letter
    ///
    /// The letter must already be lowercase; see
    /// [`normalize_key`](crate::core::normalize_key). Anything else, a
    /// repeat, or a guess after the round ended, leaves the state untouched.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let outcome = if self.status().is_over() {
            GuessOutcome::GameOver
        } else if !is_guessable(letter) {
            GuessOutcome::InvalidLetter
        } else if self.guessed.contains(&letter) {
            GuessOutcome::AlreadyGuessed
        } else {
            self.guessed.push(letter);
            if self.target.has_letter(letter) {
                GuessOutcome::Correct
            } else {
                GuessOutcome::Incorrect
            }
        };

        debug!(%letter, ?outcome, status = ?self.status(), "guess");
        outcome
    }

    /// Switch difficulty and start a fresh round
    ///
    /// Always redraws, even when `difficulty` is the current one.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(from = %self.difficulty, to = %difficulty, "difficulty changed");
        self.difficulty = difficulty;
        self.reset();
    }

    /// Start a fresh round on the current difficulty
    pub fn reset(&mut self) {
        let catalog = self.catalog;
        self.target = catalog.select_word(self.difficulty, &mut self.rng);
        self.guessed.clear();
        debug!(difficulty = %self.difficulty, len = self.target.len(), "round reset");
    }
}

impl<'a, R> Game<'a, R> {
    /// Current difficulty
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The word being guessed
    #[must_use]
    pub const fn target(&self) -> &'a Word {
        self.target
    }

    /// Letters guessed this round, in guess order
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed
    }

    /// Guessed letters not in the target, in guess order
    #[must_use]
    pub fn incorrect_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|&c| !self.target.has_letter(c))
            .collect()
    }

    /// Guessed letters in the target, in guess order
    #[must_use]
    pub fn correct_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|&c| self.target.has_letter(c))
            .collect()
    }

    /// Number of incorrect guesses so far
    #[must_use]
    pub fn incorrect_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|&&c| !self.target.has_letter(c))
            .count()
    }

    /// Incorrect guesses left before the round is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_INCORRECT_GUESSES.saturating_sub(self.incorrect_count())
    }

    /// Every letter of the target has been guessed
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.target.letters().all(|c| self.guessed.contains(&c))
    }

    /// Too many incorrect guesses
    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.incorrect_count() >= MAX_INCORRECT_GUESSES
    }

    /// Current state of the round
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_winner() {
            Status::Won
        } else if self.is_loser() {
            Status::Lost
        } else {
            Status::Playing
        }
    }

    /// Per-position letters known to the player
    ///
    /// `None` for letters not yet guessed.
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.target
            .letters()
            .map(|c| self.guessed.contains(&c).then_some(c))
            .collect()
    }
}
