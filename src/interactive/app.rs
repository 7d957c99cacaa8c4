//! TUI application state and logic

use crate::commands::SessionStats;
use crate::core::{GameState, GuessEngine, Outcome, WordPool, normalize_guess, submit_letter};
use crate::output::describe_outcome;
use crate::solver::{FrequencyStrategy, Strategy};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::warn;

/// Application state
pub struct App<'a> {
    pub engine: GuessEngine,
    pub pool: &'a WordPool,
    /// `None` when no round could be started
    pub state: Option<GameState>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
    Unplayable,
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
    Warning,
    Error,
}

impl MessageStyle {
    const fn for_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::CorrectLetter(_) | Outcome::WordComplete(_) => Self::Success,
            Outcome::WrongLetter { .. } => Self::Warning,
            Outcome::OutOfAttempts { .. } => Self::Error,
            Outcome::RepeatedOrEmptyGuess | Outcome::RoundOver(_) => Self::Info,
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    #[must_use]
    pub fn new(engine: GuessEngine, pool: &'a WordPool) -> Self {
        let mut app = Self {
            engine,
            pool,
            state: None,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: SessionStats::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.new_round();
        app
    }

    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();

        match self.engine.start_round(self.pool) {
            Ok(state) => {
                self.state = Some(state);
                self.input_mode = InputMode::Guessing;
                self.add_message("Guess the word!", MessageStyle::Info);
            }
            Err(err) => {
                warn!(%err, "cannot start round");
                self.state = None;
                self.input_mode = InputMode::Unplayable;
                self.add_message(&format!("Error: {err}"), MessageStyle::Error);
            }
        }
    }

    /// Stage a single character for the next guess, replacing any staged one
    ///
    /// Normalized the same way the engine normalizes guesses.
    pub fn stage(&mut self, c: char) {
        self.input_buffer.clear();
        self.input_buffer
            .extend(normalize_guess(c.encode_utf8(&mut [0; 4])));
    }

    /// Submit the staged character
    pub fn submit(&mut self) {
        let Some(state) = &self.state else {
            return;
        };

        let (next, outcome) = submit_letter(state, &self.input_buffer);
        self.input_buffer.clear();
        self.add_message(&describe_outcome(&outcome), MessageStyle::for_outcome(&outcome));

        if next.is_over() && outcome.ends_round() {
            self.stats.record(next.status());
            self.input_mode = InputMode::RoundOver;
            self.add_message("Press 'n' for a new word or 'q' to quit.", MessageStyle::Info);
        }

        self.state = Some(next);
    }

    /// Suggest a letter from the frequency strategy
    pub fn hint(&mut self) {
        let suggestion = self
            .state
            .as_ref()
            .and_then(|state| {
                FrequencyStrategy.select_letter(state, self.pool, self.engine.rng_mut())
            });

        match suggestion {
            Some(letter) => self.add_message(&format!("Hint: try '{letter}'"), MessageStyle::Info),
            None => self.add_message("No hint available.", MessageStyle::Info),
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

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Guessing => match key.code {
                KeyCode::Tab => self.hint(),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => self.input_buffer.clear(),
                KeyCode::Char(c) if !c.is_whitespace() => self.stage(c),
                _ => {}
            },
            InputMode::RoundOver => match key.code {
                KeyCode::Char('n') => self.new_round(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {
                    // Round is over, ignore other keys
                }
            },
            InputMode::Unplayable => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
            }
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
    let res = run_app(&mut terminal, app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Status;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn guess(app: &mut App, c: char) {
        press(app, KeyCode::Char(c));
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_in_guessing_mode() {
        let pool = WordPool::from_strs(["gato"]);
        let app = App::new(GuessEngine::seeded(0), &pool);

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.state.is_some());
    }

    #[test]
    fn empty_pool_is_unplayable() {
        let pool = WordPool::default();
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        assert_eq!(app.input_mode, InputMode::Unplayable);
        assert!(app.state.is_none());
        assert_eq!(app.messages[0].style, MessageStyle::Error);

        press(&mut app, KeyCode::Enter);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn staging_keeps_one_lowercase_char() {
        let pool = WordPool::from_strs(["gato"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.input_buffer, "g");

        press(&mut app, KeyCode::Backspace);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn staging_multi_char_lowercase_keeps_one_char() {
        let pool = WordPool::from_strs(["isla"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        // 'İ' lower-cases to 'i' plus a combining dot
        press(&mut app, KeyCode::Char('İ'));
        assert_eq!(app.input_buffer.chars().count(), 1);
        assert_eq!(app.input_buffer, "i");

        press(&mut app, KeyCode::Enter);
        assert!(app.state.as_ref().is_some_and(|state| state.has_guessed('i')));
        assert_eq!(app.state.as_ref().map(GameState::failed_attempts), Some(0));
    }

    #[test]
    fn winning_switches_to_round_over() {
        let pool = WordPool::from_strs(["sol"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        for c in ['s', 'o', 'l'] {
            guess(&mut app, c);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.won, 1);
        assert_eq!(app.state.as_ref().map(GameState::status), Some(Status::Won));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.state.as_ref().map(GameState::failed_attempts), Some(0));
    }

    #[test]
    fn losing_reveals_word_in_messages() {
        let pool = WordPool::from_strs(["sol"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        for c in ['a', 'b', 'c', 'd', 'e'] {
            guess(&mut app, c);
        }

        assert_eq!(app.stats.lost, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("The word was: sol")));
    }

    #[test]
    fn empty_submit_does_not_cost_attempt() {
        let pool = WordPool::from_strs(["sol"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.as_ref().map(GameState::failed_attempts), Some(0));
        assert!(app.messages.iter().any(|m| m.text.contains("already tried")));
    }

    #[test]
    fn hint_adds_message() {
        let pool = WordPool::from_strs(["ala"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        press(&mut app, KeyCode::Tab);
        assert!(app.messages.iter().any(|m| m.text == "Hint: try 'a'"));
    }

    #[test]
    fn escape_quits() {
        let pool = WordPool::from_strs(["sol"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let pool = WordPool::from_strs(["sol"]);
        let mut app = App::new(GuessEngine::seeded(0), &pool);

        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "m9");
    }
}
