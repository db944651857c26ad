//! Hangman word representation
//!
//! A Word stores a lowercase word along with the set of letters it contains.

use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// A candidate hangman word
///
/// Stores the word text and the distinct letters it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letter_set: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word '{0}' must contain only the letters a-z")]
    InvalidCharacters(String),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// The input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Lantern").unwrap();
    /// assert_eq!(word.text(), "lantern");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("two words").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters(text));
        }

        let letter_set = text.chars().collect();

        Ok(Self { text, letter_set })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected on construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letter_set.contains(&letter)
    }

    /// Iterate over the word's letters in order
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
