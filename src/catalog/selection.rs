//! Word selection steps
//!
//! Selection is two independent steps: filter the list by a difficulty's
//! length predicate, then pick uniformly from what is left.

use crate::core::{Difficulty, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Words admitted by `difficulty`, in list order
#[must_use]
pub fn filter_by_difficulty(words: &[Word], difficulty: Difficulty) -> Vec<&Word> {
    words
        .iter()
        .filter(|word| difficulty.admits(word.len()))
        .collect()
}

/// Pick one candidate uniformly at random
///
/// Returns `None` only when `candidates` is empty.
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(candidates: &'a [T], rng: &mut R) -> Option<&'a T> {
    candidates.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_words() -> Vec<Word> {
        words_from_slice(&["cat", "tiger", "dolphin", "elephant", "butterfly", "xylophone"])
    }

    #[test]
    fn filter_easy() {
        let words = sample_words();
        let easy: Vec<&str> = filter_by_difficulty(&words, Difficulty::Easy)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(easy, ["cat", "tiger"]);
    }

    #[test]
    fn filter_medium_includes_short_words() {
        let words = sample_words();
        let medium: Vec<&str> = filter_by_difficulty(&words, Difficulty::Medium)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(medium, ["cat", "tiger", "dolphin", "elephant"]);
    }

    #[test]
    fn filter_hard() {
        let words = sample_words();
        let hard: Vec<&str> = filter_by_difficulty(&words, Difficulty::Hard)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(hard, ["butterfly", "xylophone"]);
    }

    #[test]
    fn pick_uniform_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [Word; 0] = [];
        assert!(pick_uniform(&empty, &mut rng).is_none());
    }

    #[test]
    fn pick_uniform_single_candidate() {
        let words = words_from_slice(&["comet"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10 {
            assert_eq!(pick_uniform(&words, &mut rng).unwrap().text(), "comet");
        }
    }

    #[test]
    fn pick_uniform_reaches_every_candidate() {
        let words = sample_words();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(pick_uniform(&words, &mut rng).unwrap().text());
        }
        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn pick_uniform_is_deterministic_for_seed() {
        let words = sample_words();

        let a = pick_uniform(&words, &mut StdRng::seed_from_u64(9));
        let b = pick_uniform(&words, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn pick_uniform_over_filtered_words_respects_predicate() {
        let words = sample_words();
        let hard = filter_by_difficulty(&words, Difficulty::Hard);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            let word = pick_uniform(&hard, &mut rng).unwrap();
            assert!(word.len() > 8);
        }
    }
}
