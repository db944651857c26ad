//! Hangman - CLI
//!
//! Hangman with TUI and plain-text modes, plus an automated benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    autoplay::GuesserType,
    catalog::Catalog,
    commands::{BenchmarkConfig, run_benchmark, run_simple},
    core::Difficulty,
    game::Game,
    output::print_benchmark_result,
    wordlists::{WORDS, loader::words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word one letter at a time before the gallows are complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Starting difficulty: easy (<= 5 letters), medium (<= 8), hard (> 8)
    #[arg(short, long, global = true, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Wordlist: 'bundled' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "bundled")]
    wordlist: String,

    /// Seed for word selection (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (no TUI)
    Simple,

    /// Let an automated guesser play many rounds per difficulty
    Benchmark {
        /// Rounds to play per difficulty
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Letter selection strategy
        #[arg(short, long, value_enum, default_value_t = GuesserType::Frequency)]
        guesser: GuesserType,
    },
}

/// Load the word catalog based on the -w flag
///
/// Fails fast if any difficulty would have no words.
fn load_catalog(wordlist_mode: &str) -> Result<Catalog> {
    use hangman::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "bundled" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    Catalog::new(words).with_context(|| format!("word list '{wordlist_mode}' is unusable"))
}

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "hangman.log";

/// Where a command's logs go: a file for the TUI, stderr otherwise
fn log_file_for(command: &Commands) -> Option<&'static str> {
    match command {
        Commands::Play => Some(TUI_LOG_FILE),
        Commands::Simple | Commands::Benchmark { .. } => None,
    }
}

fn init_logging(log_file: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot create log file '{path}'"))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(log_file_for(&command))?;

    let catalog = load_catalog(&cli.wordlist)?;
    info!(words = catalog.len(), wordlist = %cli.wordlist, "catalog loaded");

    let rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match command {
        Commands::Play => run_play_command(&catalog, rng, cli.difficulty),
        Commands::Simple => run_simple_command(&catalog, rng, cli.difficulty),
        Commands::Benchmark { games, guesser } => {
            let seed = cli.seed.unwrap_or_else(rand::random);
            run_benchmark_command(&catalog, games, seed, guesser);
            Ok(())
        }
    }
}

fn run_play_command(catalog: &Catalog, rng: StdRng, difficulty: Difficulty) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(Game::with_difficulty(catalog, rng, difficulty));
    run_tui(app)
}

fn run_simple_command(catalog: &Catalog, rng: StdRng, difficulty: Difficulty) -> Result<()> {
    let mut game = Game::with_difficulty(catalog, rng, difficulty);
    run_simple(&mut game, io::stdin().lock(), io::stdout())
}

fn run_benchmark_command(catalog: &Catalog, games: usize, seed: u64, guesser: GuesserType) {
    println!("Running {games} rounds per difficulty with the {guesser:?} guesser (seed {seed})...");

    let config = BenchmarkConfig::new(games, seed, guesser);
    let result = run_benchmark(catalog, &config);
    print_benchmark_result(&result);
}
