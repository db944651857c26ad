//! Display functions for boards and command results

use super::formatters::{create_progress_bar, gallows_lines, keyboard_line, status_message};
use crate::commands::BenchmarkResult;
use crate::game::{GameView, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Write the full text board: figure, word, keyboard and status
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_board<W: Write>(out: &mut W, view: &GameView) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows_lines(view.incorrect.len()) {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)?;

    let word: Vec<String> = view
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| match slot {
            Some(c) if view.is_revealed_by_loss(i) => c.to_string().red().bold().to_string(),
            Some(c) => c.to_string().bright_white().bold().to_string(),
            None => "_".to_string(),
        })
        .collect();
    writeln!(
        out,
        "    {}    ({} letters, {})",
        word.join(" "),
        view.word_len(),
        view.difficulty
    )?;

    let wrong: String = view.incorrect.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
    writeln!(
        out,
        "    Wrong: {}    Guesses left: {}",
        if wrong.is_empty() { "-".to_string() } else { wrong.red().to_string() },
        view.remaining_guesses
    )?;
    writeln!(out, "    {}", keyboard_line(view).bright_black())?;

    if let Some(message) = status_message(view.status) {
        let banner = match view.status {
            Status::Won => message.green().bold(),
            _ => message.red().bold(),
        };
        writeln!(out, "\n    {banner}")?;
    }
    Ok(())
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for stats in &result.per_difficulty {
        println!(
            "\n🎯 {} ({} words in bucket)",
            stats.difficulty.to_string().to_uppercase().bright_cyan().bold(),
            stats.bucket_size
        );
        println!("   Rounds played:    {}", stats.games);
        println!(
            "   Win rate:         [{}] {}",
            create_progress_bar(stats.win_rate(), 100.0, 30).green(),
            format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
        );
        println!("   Avg wrong/round:  {:.2}", stats.average_incorrect());

        println!("   Wrong guesses:");
        for (wrong, &count) in stats.incorrect_distribution.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let pct = (count as f64 / stats.games as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("     {wrong}: {bar} {count:5} ({pct:5.1}%)");
        }

        if !stats.hardest_words.is_empty() {
            println!(
                "   Hardest words:    {}",
                stats.hardest_words.join(", ").bright_red()
            );
        }
    }

    println!("\n   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::game::Game;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(game: &Game<'_, StdRng>) -> String {
        let mut out = Vec::new();
        write_board(&mut out, &game.view()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_blanks_and_difficulty() {
        let catalog = Catalog::new(words_from_slice(&["cat", "butterfly"])).unwrap();
        let game = Game::new(&catalog, StdRng::seed_from_u64(0));

        let text = board(&game);
        assert!(text.contains("_ _ _"));
        assert!(text.contains("3 letters, easy"));
        assert!(text.contains("Guesses left: 6"));
        assert!(!text.contains("Winner!"));
    }

    #[test]
    fn board_shows_loss_banner() {
        let catalog = Catalog::new(words_from_slice(&["cat", "butterfly"])).unwrap();
        let mut game = Game::new(&catalog, StdRng::seed_from_u64(0));
        for letter in ['x', 'y', 'z', 'q', 'w', 'e'] {
            game.guess(letter);
        }

        let text = board(&game);
        assert!(text.contains("Nice Try"));
        assert!(text.contains("Guesses left: 0"));
        assert!(!text.contains("_ _ _"));
    }
}
