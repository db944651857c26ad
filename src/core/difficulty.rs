//! Length-based difficulty buckets

use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Longest word length admitted by [`Difficulty::Easy`]
pub const EASY_MAX_LEN: usize = 5;

/// Longest word length admitted by [`Difficulty::Medium`]
pub const MEDIUM_MAX_LEN: usize = 8;

/// Difficulty of a round, decided purely by word length
///
/// The buckets are predicates, not a partition: `Medium` admits every word
/// of at most 8 letters, easy-length words included.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", parse_err_ty = ParseDifficultyError, parse_err_fn = unknown_difficulty)]
pub enum Difficulty {
    /// Words of at most 5 letters
    #[default]
    Easy,
    /// Words of at most 8 letters
    Medium,
    /// Words longer than 8 letters
    Hard,
}

/// Error returned when a string is not `easy`, `medium` or `hard`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

fn unknown_difficulty(input: &str) -> ParseDifficultyError {
    ParseDifficultyError(input.to_string())
}

impl Difficulty {
    /// Whether a word of `len` letters belongs to this bucket
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Difficulty;
    ///
    /// assert!(Difficulty::Easy.admits(5));
    /// assert!(Difficulty::Medium.admits(3));
    /// assert!(!Difficulty::Hard.admits(8));
    /// ```
    #[inline]
    #[must_use]
    pub const fn admits(self, len: usize) -> bool {
        match self {
            Self::Easy => len <= EASY_MAX_LEN,
            Self::Medium => len <= MEDIUM_MAX_LEN,
            Self::Hard => len > MEDIUM_MAX_LEN,
        }
    }

    /// Next difficulty in selector order, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Easy,
        }
    }
}
