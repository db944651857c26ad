//! Word catalog
//!
//! The immutable list of candidate words, bucketed by difficulty. A catalog
//! is validated once on construction so that selecting a word for any
//! difficulty can never fail afterwards.

mod selection;

pub use selection::{filter_by_difficulty, pick_uniform};

use crate::core::{Difficulty, Word};
use crate::wordlists::{WORDS, loader::words_from_slice};
use rand::Rng;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

/// Error raised when a word list cannot back every difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("word list has no words for difficulty '{0}'")]
    EmptyBucket(Difficulty),
}

/// Validated, read-only word list
///
/// Every difficulty bucket is non-empty.
#[derive(Debug, Clone)]
pub struct Catalog {
    words: Vec<Word>,
    /// Output of the filter step, one bucket per difficulty
    buckets: [Vec<Word>; 3],
}

impl Catalog {
    /// Build a catalog, failing fast on an empty bucket
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyBucket` naming the first difficulty
    /// with no matching word.
    ///
    /// # Examples
    /// ```
    /// use hangman::catalog::{Catalog, CatalogError};
    /// use hangman::core::Difficulty;
    /// use hangman::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["cat", "planet", "butterfly"]);
    /// assert!(Catalog::new(words).is_ok());
    ///
    /// let short = words_from_slice(&["cat", "planet"]);
    /// assert_eq!(
    ///     Catalog::new(short).unwrap_err(),
    ///     CatalogError::EmptyBucket(Difficulty::Hard)
    /// );
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, CatalogError> {
        let mut buckets: [Vec<Word>; 3] = Default::default();

        for difficulty in Difficulty::iter() {
            let bucket: Vec<Word> = filter_by_difficulty(&words, difficulty)
                .into_iter()
                .cloned()
                .collect();

            if bucket.is_empty() {
                return Err(CatalogError::EmptyBucket(difficulty));
            }
            debug!(%difficulty, words = bucket.len(), "catalog bucket ready");
            buckets[difficulty as usize] = bucket;
        }

        Ok(Self { words, buckets })
    }

    /// Catalog over the word list bundled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the bundled list itself is misconfigured.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Pick a word for `difficulty` uniformly at random
    ///
    /// # Panics
    ///
    /// Will not panic - the `expect()` call is guaranteed safe because
    /// construction rejects empty buckets.
    pub fn select_word<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> &Word {
        pick_uniform(&self.buckets[difficulty as usize], rng)
            .expect("catalog buckets are validated non-empty")
    }

    /// Words admitted by `difficulty`, in list order
    pub fn candidates(&self, difficulty: Difficulty) -> impl Iterator<Item = &Word> + '_ {
        self.buckets[difficulty as usize].iter()
    }

    /// Number of words admitted by `difficulty`
    #[must_use]
    pub fn bucket_len(&self, difficulty: Difficulty) -> usize {
        self.buckets[difficulty as usize].len()
    }

    /// All words, in list order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a validated catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog(words: &[&str]) -> Result<Catalog, CatalogError> {
        Catalog::new(words_from_slice(words))
    }

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.len(), WORDS.len());
        for difficulty in Difficulty::iter() {
            assert!(catalog.bucket_len(difficulty) > 0);
        }
    }

    #[test]
    fn empty_list_fails_on_easy_first() {
        assert_eq!(
            Catalog::new(Vec::new()).unwrap_err(),
            CatalogError::EmptyBucket(Difficulty::Easy)
        );
    }

    #[test]
    fn missing_hard_words_fails() {
        assert_eq!(
            catalog(&["cat", "dolphin"]).unwrap_err(),
            CatalogError::EmptyBucket(Difficulty::Hard)
        );
    }

    #[test]
    fn only_long_words_fails_on_easy() {
        assert_eq!(
            catalog(&["butterfly"]).unwrap_err(),
            CatalogError::EmptyBucket(Difficulty::Easy)
        );
    }

    #[test]
    fn medium_satisfied_by_easy_words() {
        // No 6-8 letter word, yet medium admits "cat"
        let catalog = catalog(&["cat", "butterfly"]).unwrap();
        assert_eq!(catalog.bucket_len(Difficulty::Medium), 1);
    }

    #[test]
    fn buckets_match_filter_step() {
        let catalog = Catalog::bundled().unwrap();
        for difficulty in Difficulty::iter() {
            let cached: Vec<&Word> = catalog.candidates(difficulty).collect();
            assert_eq!(cached, filter_by_difficulty(catalog.words(), difficulty));
        }
    }

    #[test]
    fn select_word_is_pick_over_filtered_bucket() {
        let catalog = Catalog::bundled().unwrap();

        for difficulty in Difficulty::iter() {
            let filtered = filter_by_difficulty(catalog.words(), difficulty);
            for seed in 0..20 {
                let expected = pick_uniform(&filtered, &mut StdRng::seed_from_u64(seed)).copied();
                let drawn = catalog.select_word(difficulty, &mut StdRng::seed_from_u64(seed));
                assert_eq!(Some(drawn), expected, "seed {seed} on {difficulty}");
            }
        }
    }

    #[test]
    fn select_word_satisfies_predicate_for_all_difficulties() {
        let catalog = Catalog::bundled().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        for difficulty in Difficulty::iter() {
            for _ in 0..200 {
                let word = catalog.select_word(difficulty, &mut rng);
                assert!(
                    difficulty.admits(word.len()),
                    "{word} drawn for {difficulty}"
                );
                assert!(!word.is_empty());
                assert!(word.text().chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn select_word_deterministic_with_seed() {
        let catalog = Catalog::bundled().unwrap();
        let a = catalog.select_word(Difficulty::Medium, &mut StdRng::seed_from_u64(5));
        let b = catalog.select_word(Difficulty::Medium, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
