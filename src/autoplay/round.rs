//! Playing a whole round without a human

use super::Guesser;
use crate::catalog::Catalog;
use crate::core::ALPHABET;
use crate::game::{Game, Status};
use rand::Rng;

/// Result of one automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    pub incorrect: usize,
}

/// Let `guesser` play `game` until it is won or lost
///
/// Stops early if the guesser runs out of letters or only offers letters
/// the game will not record.
pub fn play_round<R: Rng, G: Guesser + ?Sized, Q: Rng + ?Sized>(
    game: &mut Game<'_, R>,
    catalog: &Catalog,
    guesser: &G,
    rng: &mut Q,
) -> RoundResult {
    for _ in 0..ALPHABET.len() {
        if game.status().is_over() {
            break;
        }
        let Some(letter) = guesser.next_letter(&game.view(), catalog, rng) else {
            break;
        };
        if !game.guess(letter).is_recorded() {
            break;
        }
    }

    RoundResult {
        word: game.target().text().to_string(),
        won: game.status() == Status::Won,
        guesses: game.guessed_letters().len(),
        incorrect: game.incorrect_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::{FrequencyGuesser, GuesserType, RandomGuesser};
    use crate::core::Difficulty;
    use crate::game::MAX_INCORRECT_GUESSES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn rounds_always_finish() {
        let catalog = Catalog::bundled().unwrap();

        for difficulty in Difficulty::iter() {
            for seed in 0..20 {
                let mut game =
                    Game::with_difficulty(&catalog, StdRng::seed_from_u64(seed), difficulty);
                let mut rng = StdRng::seed_from_u64(seed);
                let result = play_round(&mut game, &catalog, &RandomGuesser, &mut rng);

                assert!(game.status().is_over());
                assert_eq!(result.won, !game.is_loser());
                assert!(result.incorrect <= MAX_INCORRECT_GUESSES);
            }
        }
    }

    #[test]
    fn frequency_beats_random() {
        let catalog = Catalog::bundled().unwrap();
        let mut wins = [0usize; 2];

        for (slot, guesser) in [GuesserType::Frequency, GuesserType::Random]
            .into_iter()
            .enumerate()
        {
            for seed in 0..40 {
                let mut game = Game::with_difficulty(
                    &catalog,
                    StdRng::seed_from_u64(seed),
                    Difficulty::Medium,
                );
                let mut rng = StdRng::seed_from_u64(seed + 1000);
                if play_round(&mut game, &catalog, &guesser, &mut rng).won {
                    wins[slot] += 1;
                }
            }
        }

        assert!(wins[0] > wins[1], "frequency {} vs random {}", wins[0], wins[1]);
    }

    #[test]
    fn result_reports_target() {
        let catalog = Catalog::bundled().unwrap();
        let mut game = Game::new(&catalog, StdRng::seed_from_u64(9));
        let target = game.target().text().to_string();
        let mut rng = StdRng::seed_from_u64(9);

        let result = play_round(&mut game, &catalog, &FrequencyGuesser, &mut rng);
        assert_eq!(result.word, target);
        assert_eq!(result.guesses, game.guessed_letters().len());
    }
}
