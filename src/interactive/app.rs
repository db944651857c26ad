//! TUI application state and logic

use crate::core::{Difficulty, normalize_key};
use crate::game::{Game, GuessOutcome, Status};
use crate::output::formatters::status_message;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, StdRng>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(game: Game<'a, StdRng>) -> Self {
        Self {
            game,
            messages: vec![Message {
                text: "Type a letter to guess. Tab or 1/2/3 changes difficulty.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.new_round(),
            KeyCode::Tab => self.change_difficulty(self.game.difficulty().next()),
            KeyCode::Char('1') => self.change_difficulty(Difficulty::Easy),
            KeyCode::Char('2') => self.change_difficulty(Difficulty::Medium),
            KeyCode::Char('3') => self.change_difficulty(Difficulty::Hard),
            KeyCode::Char(c) => {
                if let Some(letter) = normalize_key(c) {
                    self.guess(letter);
                }
            }
            _ => {}
        }
    }

    /// Forward a guess and report what happened
    pub fn guess(&mut self, letter: char) {
        match self.game.guess(letter) {
            GuessOutcome::Correct | GuessOutcome::Incorrect => self.announce_result(),
            GuessOutcome::AlreadyGuessed => self.add_message(
                &format!("Already guessed '{}'", letter.to_ascii_uppercase()),
                MessageStyle::Error,
            ),
            GuessOutcome::InvalidLetter | GuessOutcome::GameOver => {}
        }
    }

    pub fn new_round(&mut self) {
        self.game.reset();
        self.messages.clear();
        self.add_message("New word! Good luck.", MessageStyle::Info);
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
        self.messages.clear();
        self.add_message(
            &format!("Difficulty: {difficulty}. New word drawn."),
            MessageStyle::Info,
        );
    }

    fn announce_result(&mut self) {
        let status = self.game.status();
        if let Some(text) = status_message(status) {
            let style = if status == Status::Won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(text, style);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Draw and dispatch events until the user quits
///
/// `next_event` is `crossterm::event::read` outside of tests.
fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if let Some(letter) = super::rendering::key_at(area, mouse.column, mouse.row) {
                    debug!(%letter, "keyboard click");
                    app.guess(letter);
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
