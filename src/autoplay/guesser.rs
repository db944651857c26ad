//! Letter selection strategies
//!
//! Defines the Guesser trait and the runtime-selectable wrapper.

use super::FrequencyGuesser;
use crate::catalog::Catalog;
use crate::core::ALPHABET;
use crate::game::GameView;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for choosing the next letter to guess
pub trait Guesser {
    /// Choose an unguessed letter for the round described by `view`
    ///
    /// Returns `None` if every letter has been guessed.
    fn next_letter<R: Rng + ?Sized>(
        &self,
        view: &GameView,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<char>;
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of guesser while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GuesserType {
    /// Most common letter among words still consistent with the board
    #[default]
    Frequency,
    /// Uniformly random unguessed letter
    Random,
}

impl Guesser for GuesserType {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        view: &GameView,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<char> {
        match self {
            Self::Frequency => FrequencyGuesser.next_letter(view, catalog, rng),
            Self::Random => RandomGuesser.next_letter(view, catalog, rng),
        }
    }
}

/// Random guesser
///
/// Picks any letter not yet guessed. A baseline for the frequency guesser.
pub struct RandomGuesser;

impl Guesser for RandomGuesser {
    fn next_letter<R: Rng + ?Sized>(
        &self,
        view: &GameView,
        _catalog: &Catalog,
        rng: &mut R,
    ) -> Option<char> {
        let unguessed: Vec<char> = ALPHABET
            .iter()
            .copied()
            .filter(|c| !view.guessed.contains(c))
            .collect();
        unguessed.choose(rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn catalog() -> Catalog {
        Catalog::new(words_from_slice(&["cat", "butterfly"])).unwrap()
    }

    #[test]
    fn random_guesser_never_repeats() {
        let catalog = catalog();
        let mut game = Game::new(&catalog, StdRng::seed_from_u64(0));
        let mut rng = StdRng::seed_from_u64(8);

        for letter in ['q', 'w', 'c'] {
            game.guess(letter);
        }
        let view = game.view();
        for _ in 0..100 {
            let letter = RandomGuesser.next_letter(&view, &catalog, &mut rng).unwrap();
            assert!(!view.guessed.contains(&letter));
        }
    }

    #[test]
    fn random_guesser_exhausted_alphabet() {
        let catalog = catalog();
        let game = Game::new(&catalog, StdRng::seed_from_u64(0));
        let mut view = game.view();
        view.guessed = ALPHABET.to_vec();

        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(RandomGuesser.next_letter(&view, &catalog, &mut rng), None);
    }

    #[test]
    fn guesser_type_dispatches() {
        let catalog = catalog();
        let game = Game::new(&catalog, StdRng::seed_from_u64(0));
        let view = game.view();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            GuesserType::Frequency.next_letter(&view, &catalog, &mut rng),
            FrequencyGuesser.next_letter(&view, &catalog, &mut rng)
        );
        assert!(
            GuesserType::Random
                .next_letter(&view, &catalog, &mut rng)
                .is_some()
        );
    }
}
