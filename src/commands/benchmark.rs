//! Benchmark command
//!
//! Plays many automated rounds per difficulty and summarizes how often a
//! guesser wins.

use crate::autoplay::{GuesserType, RoundResult, play_round};
use crate::catalog::Catalog;
use crate::core::Difficulty;
use crate::game::{Game, MAX_INCORRECT_GUESSES};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::info;

/// How many of the most-missed words to report per difficulty
const HARDEST_SHOWN: usize = 5;

/// Benchmark settings
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub games: usize,
    pub seed: u64,
    pub guesser: GuesserType,
    pub difficulties: Vec<Difficulty>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(games: usize, seed: u64, guesser: GuesserType) -> Self {
        use strum::IntoEnumIterator;

        Self {
            games,
            seed,
            guesser,
            difficulties: Difficulty::iter().collect(),
            show_progress: true,
        }
    }
}

/// Aggregate results for one difficulty
#[derive(Debug, Clone)]
pub struct DifficultyStats {
    pub difficulty: Difficulty,
    pub bucket_size: usize,
    pub games: usize,
    pub wins: usize,
    pub total_incorrect: usize,
    /// Rounds by number of wrong guesses, `0..=MAX_INCORRECT_GUESSES`
    pub incorrect_distribution: [usize; MAX_INCORRECT_GUESSES + 1],
    /// Words lost most often, most-lost first
    pub hardest_words: Vec<String>,
}

impl DifficultyStats {
    fn from_rounds(difficulty: Difficulty, bucket_size: usize, rounds: &[RoundResult]) -> Self {
        let mut incorrect_distribution = [0; MAX_INCORRECT_GUESSES + 1];
        let mut losses: rustc_hash::FxHashMap<&str, usize> = rustc_hash::FxHashMap::default();

        for round in rounds {
            incorrect_distribution[round.incorrect.min(MAX_INCORRECT_GUESSES)] += 1;
            if !round.won {
                *losses.entry(round.word.as_str()).or_insert(0) += 1;
            }
        }

        let mut hardest: Vec<(&str, usize)> = losses.into_iter().collect();
        hardest.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        Self {
            difficulty,
            bucket_size,
            games: rounds.len(),
            wins: rounds.iter().filter(|r| r.won).count(),
            total_incorrect: rounds.iter().map(|r| r.incorrect).sum(),
            incorrect_distribution,
            hardest_words: hardest
                .into_iter()
                .take(HARDEST_SHOWN)
                .map(|(word, _)| word.to_string())
                .collect(),
        }
    }

    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64 * 100.0
    }

    /// Mean wrong guesses per round
    #[must_use]
    pub fn average_incorrect(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_incorrect as f64 / self.games as f64
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub per_difficulty: Vec<DifficultyStats>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run the benchmark
///
/// Every round gets its own seeded generators, so results depend only on
/// the config and not on thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_benchmark(catalog: &Catalog, config: &BenchmarkConfig) -> BenchmarkResult {
    let start = Instant::now();
    let total = config.games * config.difficulties.len();
    info!(games = config.games, guesser = ?config.guesser, "benchmark started");

    let pb = if config.show_progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let per_difficulty = config
        .difficulties
        .iter()
        .map(|&difficulty| {
            pb.set_message(difficulty.to_string());
            let rounds: Vec<RoundResult> = (0..config.games)
                .into_par_iter()
                .map(|i| {
                    let seed = round_seed(config.seed, difficulty, i);
                    let mut game =
                        Game::with_difficulty(catalog, StdRng::seed_from_u64(seed), difficulty);
                    let mut guesser_rng = StdRng::seed_from_u64(seed.rotate_left(32));
                    let result = play_round(&mut game, catalog, &config.guesser, &mut guesser_rng);
                    pb.inc(1);
                    result
                })
                .collect();

            DifficultyStats::from_rounds(difficulty, catalog.bucket_len(difficulty), &rounds)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let rounds_per_second = total as f64 / duration.as_secs_f64().max(f64::EPSILON);
    info!(?duration, "benchmark finished");

    BenchmarkResult {
        per_difficulty,
        duration,
        rounds_per_second,
    }
}

fn round_seed(base: u64, difficulty: Difficulty, round: usize) -> u64 {
    base ^ ((difficulty as u64) << 56) ^ round as u64
}
