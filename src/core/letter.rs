//! Letter rules shared by the input boundary and the engine
//!
//! The engine only ever sees lowercase ASCII letters. Anything else is
//! filtered out here, before it can reach a round.

/// Letters a player may guess, in keyboard order
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Whether the engine accepts `letter` as a guess
///
/// Only `a..=z` qualifies. Uppercase letters are not guessable; callers
/// normalize with [`normalize_key`] first.
#[inline]
#[must_use]
pub const fn is_guessable(letter: char) -> bool {
    letter.is_ascii_lowercase()
}

/// Normalize a raw key press into a guessable letter
///
/// ASCII letters are lowercased; every other character is dropped.
///
/// # Examples
/// ```
/// use hangman::core::normalize_key;
///
/// assert_eq!(normalize_key('q'), Some('q'));
/// assert_eq!(normalize_key('Q'), Some('q'));
/// assert_eq!(normalize_key('7'), None);
/// assert_eq!(normalize_key('é'), None);
/// ```
#[inline]
#[must_use]
pub const fn normalize_key(key: char) -> Option<char> {
    if key.is_ascii_alphabetic() {
        Some(key.to_ascii_lowercase())
    } else {
        None
    }
}
