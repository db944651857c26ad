//! TUI rendering with ratatui
//!
//! Draws the gallows, the word, the on-screen keyboard and the status line.
//! Reads a [`GameView`] only; no game rules live here.

use super::app::{App, MessageStyle};
use crate::core::Difficulty;
use crate::game::{GameView, KeyState, MAX_INCORRECT_GUESSES, Status};
use crate::output::formatters::{gallows_lines, status_message};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

/// On-screen keyboard rows
const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Columns taken by one key, spacer included
const KEY_WIDTH: u16 = 4;

struct Areas {
    header: Rect,
    difficulty: Rect,
    gallows: Rect,
    word: Rect,
    keyboard: Rect,
    status: Rect,
    help: Rect,
}

fn areas(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(3),  // Difficulty selector
            Constraint::Min(11),    // Gallows + word
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[2]);

    Areas {
        header: rows[0],
        difficulty: rows[1],
        gallows: main[0],
        word: main[1],
        keyboard: rows[3],
        status: rows[4],
        help: rows[5],
    }
}

fn keyboard_block(enabled: bool) -> Block<'static> {
    let title = if enabled {
        " Keyboard "
    } else {
        " Keyboard (Enter for a new word) "
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Letter under a mouse position, if it hits an on-screen key
#[must_use]
pub fn key_at(frame: Rect, column: u16, row: u16) -> Option<char> {
    let inner = keyboard_block(true).inner(areas(frame).keyboard);
    let row_index = usize::from(row.checked_sub(inner.y)?);
    if row >= inner.y + inner.height {
        return None;
    }
    let keys = KEY_ROWS.get(row_index)?;

    let width = keys.len() as u16 * KEY_WIDTH;
    let left = inner.x + inner.width.saturating_sub(width) / 2;
    let offset = column.checked_sub(left)?;
    keys.chars().nth(usize::from(offset / KEY_WIDTH))
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let view = app.game.view();
    let areas = areas(f.area());

    render_header(f, areas.header);
    render_difficulty(f, &view, areas.difficulty);
    render_gallows(f, &view, areas.gallows);
    render_word(f, &view, areas.word);
    render_keyboard(f, &view, areas.keyboard);
    render_status(f, app, &view, areas.status);
    render_help(f, areas.help);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_difficulty(f: &mut Frame, view: &GameView, area: Rect) {
    let titles: Vec<String> = Difficulty::iter()
        .enumerate()
        .map(|(i, d)| format!("{} {}", i + 1, d.to_string().to_uppercase()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(view.difficulty as usize)
        .block(
            Block::default()
                .title(" Select Difficulty (Tab) ")
                .borders(Borders::ALL),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_widget(tabs, area);
}

fn render_gallows(f: &mut Frame, view: &GameView, area: Rect) {
    let color = match view.status {
        Status::Lost => Color::Red,
        Status::Won => Color::Green,
        Status::Playing => Color::White,
    };

    let lines: Vec<Line> = gallows_lines(view.incorrect.len())
        .into_iter()
        .map(Line::from)
        .collect();

    let figure = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(figure, area);
}

fn render_word(f: &mut Frame, view: &GameView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let mut slots = Vec::with_capacity(view.word_len() * 2);
    for (i, slot) in view.slots.iter().enumerate() {
        let span = match slot {
            Some(c) if view.is_revealed_by_loss(i) => Span::styled(
                c.to_ascii_uppercase().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Some(c) => Span::styled(
                c.to_ascii_uppercase().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("_", Style::default().fg(Color::DarkGray)),
        };
        slots.push(span);
        slots.push(Span::raw(" "));
    }

    let wrong: String = view
        .incorrect
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let content = vec![
        Line::from(""),
        Line::from(slots),
        Line::from(""),
        Line::from(format!("{} letters", view.word_len())).style(Style::default().fg(Color::Gray)),
        Line::from(vec![
            Span::raw("Wrong: "),
            Span::styled(wrong, Style::default().fg(Color::Red)),
        ]),
    ];

    let word = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, chunks[0]);

    let used = view.incorrect.len().min(MAX_INCORRECT_GUESSES);
    let gauge = Gauge::default()
        .block(Block::default().title(" Wrong Guesses ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if used >= MAX_INCORRECT_GUESSES - 1 {
            Color::Red
        } else {
            Color::Cyan
        }))
        .percent((used * 100 / MAX_INCORRECT_GUESSES) as u16)
        .label(format!("{used}/{MAX_INCORRECT_GUESSES} | {} left", view.remaining_guesses));
    f.render_widget(gauge, chunks[1]);
}

fn key_style(view: &GameView, letter: char) -> Style {
    match view.key_state(letter) {
        KeyState::Active => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyState::Inactive => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT),
        KeyState::Unused if view.keyboard_enabled() => Style::default().fg(Color::White),
        KeyState::Unused => Style::default().fg(Color::DarkGray),
    }
}

fn render_keyboard(f: &mut Frame, view: &GameView, area: Rect) {
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    [
                        Span::styled(format!(" {} ", c.to_ascii_uppercase()), key_style(view, c)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(keyboard_block(view.keyboard_enabled()));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, view: &GameView, area: Rect) {
    let (text, color) = if let Some(text) = status_message(view.status) {
        let color = if view.status == Status::Won {
            Color::Green
        } else {
            Color::Red
        };
        (text.to_string(), color)
    } else if let Some(msg) = app.messages.last() {
        let color = match msg.style {
            MessageStyle::Info => Color::White,
            MessageStyle::Success => Color::Green,
            MessageStyle::Error => Color::Red,
        };
        (msg.text.clone(), color)
    } else {
        (String::new(), Color::White)
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(status, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("a-z: Guess | Enter: New Word | Tab/1-3: Difficulty | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
