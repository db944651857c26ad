//! Read-only render snapshot
//!
//! The presentation layer draws from a [`GameView`] and never touches the
//! session directly.

use super::engine::{Game, Status};
use crate::core::Difficulty;

/// How a keyboard key should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    /// Not guessed yet
    Unused,
    /// Guessed and in the word
    Active,
    /// Guessed and not in the word
    Inactive,
}

/// Snapshot of everything a renderer may show
///
/// The answer is only exposed once the round is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub difficulty: Difficulty,
    /// One entry per letter of the target; `None` while hidden
    pub slots: Vec<Option<char>>,
    pub guessed: Vec<char>,
    pub incorrect: Vec<char>,
    pub correct: Vec<char>,
    pub status: Status,
    pub remaining_guesses: usize,
    pub answer: Option<String>,
}

impl<R> Game<'_, R> {
    /// Take a render snapshot of the current round
    #[must_use]
    pub fn view(&self) -> GameView {
        let status = self.status();
        let slots = if status == Status::Lost {
            self.target().letters().map(Some).collect()
        } else {
            self.revealed()
        };

        GameView {
            difficulty: self.difficulty(),
            slots,
            guessed: self.guessed_letters().to_vec(),
            incorrect: self.incorrect_letters(),
            correct: self.correct_letters(),
            status,
            remaining_guesses: self.remaining_guesses(),
            answer: (status == Status::Lost).then(|| self.target().text().to_string()),
        }
    }
}

impl GameView {
    /// Highlight for one keyboard letter
    #[must_use]
    pub fn key_state(&self, letter: char) -> KeyState {
        if self.correct.contains(&letter) {
            KeyState::Active
        } else if self.incorrect.contains(&letter) {
            KeyState::Inactive
        } else {
            KeyState::Unused
        }
    }

    /// Whether the keyboard accepts input
    #[must_use]
    pub const fn keyboard_enabled(&self) -> bool {
        !self.status.is_over()
    }

    /// Whether the slot at `index` was filled by the loss reveal rather than a guess
    #[must_use]
    pub fn is_revealed_by_loss(&self, index: usize) -> bool {
        self.status == Status::Lost
            && self
                .slots
                .get(index)
                .copied()
                .flatten()
                .is_some_and(|c| !self.guessed.contains(&c))
    }

    /// Number of letters in the target
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.slots.len()
    }

    /// Slots as text, hidden letters shown as `_`
    ///
    /// # Examples
    /// ```
    /// use hangman::catalog::Catalog;
    /// use hangman::game::Game;
    /// use hangman::wordlists::loader::words_from_slice;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let catalog = Catalog::new(words_from_slice(&["cat", "butterfly"])).unwrap();
    /// let mut game = Game::new(&catalog, StdRng::seed_from_u64(0));
    /// game.guess('a');
    /// assert_eq!(game.view().masked(), "_ a _");
    /// ```
    #[must_use]
    pub fn masked(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
