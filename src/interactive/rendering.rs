//! TUI rendering with ratatui
//!
//! Board, attempts gauge and session panels for the Hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, Status, render_mask};
use crate::output::formatters::format_letters;
use crate::solver::candidates;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN - Guess the Word")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Word
            Constraint::Length(3),      // Attempts
            Constraint::Min(4),         // Letters
        ])
        .split(area);

    match &app.state {
        Some(state) => {
            render_word(f, state, chunks[0]);
            render_attempts(f, state, chunks[1]);
            render_letters(f, state, chunks[2]);
        }
        None => {
            let paragraph = Paragraph::new("No words available")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .title(" Word ")
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded),
                );
            f.render_widget(paragraph, area);
        }
    }
}

fn render_word(f: &mut Frame, state: &GameState, area: Rect) {
    let color = match state.status() {
        Status::InProgress => Color::Yellow,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let mask = render_mask(state);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            mask.to_string().to_uppercase(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} letters, {} revealed",
            mask.len(),
            mask.revealed()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_attempts(f: &mut Frame, state: &GameState, area: Rect) {
    let failed = state.failed_attempts();
    let max = state.max_attempts();
    let ratio = if max == 0 {
        0.0
    } else {
        f64::from(failed) / f64::from(max)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Failed Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{failed} of {max}"));

    f.render_widget(gauge, area);
}

fn render_letters(f: &mut Frame, state: &GameState, area: Rect) {
    let content = vec![
        Line::from(vec![
            Span::raw("Hits:   "),
            Span::styled(
                format_letters(&state.correct_letters()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::raw("Misses: "),
            Span::styled(
                format_letters(&state.wrong_letters()),
                Style::default().fg(Color::Red),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    render_session(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_session(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app
        .state
        .as_ref()
        .map_or(0, |state| candidates(state, app.pool).len());

    let content = vec![
        Line::from(format!("Pool:       {} words", app.pool.len())),
        Line::from(format!("Candidates: {remaining}")),
        Line::from(format!(
            "Won: {}  Lost: {}",
            app.stats.won, app.stats.lost
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Warning => Style::default().fg(Color::Yellow),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Type a letter, Enter to guess | TAB for a hint ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " Round over | Press 'n' for a new word or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Unplayable => (
            " No words to play | Press 'q' to quit ",
            String::new(),
            Color::Red,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::RoundOver => "Mode: Round Over",
        InputMode::Unplayable => "Mode: No Words",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "Esc: Quit | Enter: Guess | Backspace: Clear",
        InputMode::RoundOver => "q: Quit | n: New Word",
        InputMode::Unplayable => "q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessEngine, WordPool};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn draws_masked_word() {
        let pool = WordPool::from_strs(["gato"]);
        let app = App::new(GuessEngine::seeded(0), &pool);

        let screen = draw(&app);
        assert!(screen.contains("_ _ _ _"));
        assert!(screen.contains("0 of 5"));
    }

    #[test]
    fn draws_unplayable_pool() {
        let pool = WordPool::default();
        let app = App::new(GuessEngine::seeded(0), &pool);

        let screen = draw(&app);
        assert!(screen.contains("No words available"));
    }
}
