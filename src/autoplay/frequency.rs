//! Letter-frequency guessing
//!
//! Narrows the catalog to words that fit the board, then guesses the letter
//! appearing in the most of them.

use super::Guesser;
use crate::catalog::Catalog;
use crate::core::{ALPHABET, Word};
use crate::game::GameView;
use rand::Rng;
use rustc_hash::FxHashMap;

/// Guesses the most common unguessed letter among consistent words
///
/// Ties break alphabetically, so the choice is deterministic.
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        view: &GameView,
        catalog: &Catalog,
        _rng: &mut R,
    ) -> Option<char> {
        let candidates = consistent_candidates(view, catalog.candidates(view.difficulty));
        let counts = letter_counts(&candidates, &view.guessed);

        // ALPHABET order makes `max_by_key` keep the last max, so walk it in
        // reverse to prefer the earliest letter on ties.
        ALPHABET
            .iter()
            .rev()
            .copied()
            .filter(|c| !view.guessed.contains(c))
            .max_by_key(|c| counts.get(c).copied().unwrap_or(0))
    }
}

/// Words that could still be the target given what the board shows
///
/// A word fits when its length matches, every revealed slot agrees, no
/// hidden slot holds an already guessed letter, and it contains none of
/// the incorrect letters.
pub fn consistent_candidates<'a>(
    view: &GameView,
    words: impl Iterator<Item = &'a Word>,
) -> Vec<&'a Word> {
    words
        .filter(|word| word.len() == view.word_len())
        .filter(|word| {
            word.letters().zip(&view.slots).all(|(c, slot)| match slot {
                Some(shown) => c == *shown,
                None => !view.guessed.contains(&c),
            })
        })
        .filter(|word| !view.incorrect.iter().any(|&c| word.has_letter(c)))
        .collect()
}

/// How many candidate words contain each letter not yet guessed
#[must_use]
pub fn letter_counts(candidates: &[&Word], guessed: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();

    for word in candidates {
        for &letter in ALPHABET.iter().filter(|c| !guessed.contains(c)) {
            if word.has_letter(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::new(words_from_slice(&["cat", "cot", "cut", "dog", "butterfly"])).unwrap()
    }

    #[test]
    fn consistent_candidates_filters_by_board() {
        let catalog = Catalog::new(words_from_slice(&["cat", "butterfly"])).unwrap();
        let mut game = Game::new(&catalog, StdRng::seed_from_u64(0));
        game.guess('t');
        game.guess('o');

        let words = words_from_slice(&["cat", "cot", "cut", "tat", "dog", "tiger"]);
        let fits: Vec<&str> = consistent_candidates(&game.view(), words.iter())
            .into_iter()
            .map(Word::text)
            .collect();

        // "cot" has an incorrect letter, "tat" has a guessed letter in a hidden slot
        assert_eq!(fits, ["cat", "cut"]);
    }

    #[test]
    fn letter_counts_skip_guessed() {
        let words = words_from_slice(&["cat", "cot", "cut"]);
        let refs: Vec<&Word> = words.iter().collect();
        let counts = letter_counts(&refs, &['c']);

        assert_eq!(counts.get(&'c'), None);
        assert_eq!(counts.get(&'t'), Some(&3));
        assert_eq!(counts.get(&'a'), Some(&1));
    }

    #[test]
    fn letter_counts_once_per_word() {
        let words = words_from_slice(&["balloon"]);
        let refs: Vec<&Word> = words.iter().collect();
        let counts = letter_counts(&refs, &[]);

        assert_eq!(counts.get(&'l'), Some(&1));
        assert_eq!(counts.get(&'o'), Some(&1));
    }

    #[test]
    fn picks_most_common_letter() {
        let catalog = catalog();
        let game = Game::new(&catalog, StdRng::seed_from_u64(0));
        let mut rng = StdRng::seed_from_u64(0);

        // Easy words: cat cot cut dog. 'c' and 't' tie at 3; 'c' wins alphabetically.
        let letter = FrequencyGuesser.next_letter(&game.view(), &catalog, &mut rng);
        assert_eq!(letter, Some('c'));
    }

    #[test]
    fn wins_small_catalog() {
        let catalog = catalog();
        let mut game = Game::new(&catalog, StdRng::seed_from_u64(4));
        let mut rng = StdRng::seed_from_u64(0);

        while !game.status().is_over() {
            let letter = FrequencyGuesser
                .next_letter(&game.view(), &catalog, &mut rng)
                .unwrap();
            assert!(game.guess(letter).is_recorded());
        }
        assert!(game.is_winner());
    }
}
