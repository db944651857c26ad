//! Formatting utilities for terminal output

use crate::core::ALPHABET;
use crate::game::{GameView, KeyState, MAX_INCORRECT_GUESSES, Status};

/// Draw the gallows with one body part per incorrect guess
///
/// Parts appear in order: head, body, right arm, left arm, right leg, left
/// leg. Counts above six draw the full figure.
#[must_use]
pub fn gallows_lines(incorrect: usize) -> Vec<String> {
    let stage = incorrect.min(MAX_INCORRECT_GUESSES);
    let part = |at: usize, ch: char| if stage >= at { ch } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(4, '/'), part(2, '|'), part(3, '\\')),
        format!(" {} {}  |", part(6, '/'), part(5, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Banner shown once a round is over
#[must_use]
pub const fn status_message(status: Status) -> Option<&'static str> {
    match status {
        Status::Playing => None,
        Status::Won => Some("Winner! - Press Enter to play again"),
        Status::Lost => Some("Nice Try - Press Enter to play again"),
    }
}

/// Plain-text keyboard: unused letters as-is, correct ones uppercased,
/// incorrect ones replaced by `·`
#[must_use]
pub fn keyboard_line(view: &GameView) -> String {
    ALPHABET
        .iter()
        .map(|&c| match view.key_state(c) {
            KeyState::Unused => c,
            KeyState::Active => c.to_ascii_uppercase(),
            KeyState::Inactive => '·',
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::game::Game;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn gallows_empty() {
        let lines = gallows_lines(0);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[2], "      |");
        assert_eq!(lines[3], "      |");
        assert_eq!(lines[4], "      |");
    }

    #[test]
    fn gallows_parts_in_order() {
        assert_eq!(gallows_lines(1)[2], "  O   |");
        assert_eq!(gallows_lines(2)[3], "  |   |");
        assert_eq!(gallows_lines(3)[3], "  |\\  |");
        assert_eq!(gallows_lines(4)[3], " /|\\  |");
        assert_eq!(gallows_lines(5)[4], "   \\  |");
        assert_eq!(gallows_lines(6)[4], " / \\  |");
    }

    #[test]
    fn gallows_clamps_past_six() {
        assert_eq!(gallows_lines(9), gallows_lines(6));
    }

    #[test]
    fn gallows_rows_align() {
        for stage in 0..=6 {
            for line in &gallows_lines(stage)[..6] {
                assert_eq!(line.chars().count(), 7, "stage {stage}: {line:?}");
            }
        }
    }

    #[test]
    fn status_messages() {
        assert_eq!(status_message(Status::Playing), None);
        assert!(status_message(Status::Won).unwrap().starts_with("Winner!"));
        assert!(status_message(Status::Lost).unwrap().starts_with("Nice Try"));
    }

    #[test]
    fn keyboard_marks_guesses() {
        let catalog = Catalog::new(words_from_slice(&["cat", "butterfly"])).unwrap();
        let mut game = Game::new(&catalog, StdRng::seed_from_u64(0));
        game.guess('a');
        game.guess('b');

        let line = keyboard_line(&game.view());
        assert!(line.starts_with("A · c d"));
        assert!(line.ends_with("x y z"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
