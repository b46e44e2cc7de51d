//! TUI application state and logic

use crate::core::{Code, GameError};
use crate::game::{GameSession, GameStatus, GuessBuffer, Statistics, SubmitOutcome};
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
use tracing::debug;

/// Application state
pub struct App {
    pub session: GameSession,
    pub buffer: GuessBuffer,
    pub cursor: usize,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub last_outcome: Option<SubmitOutcome>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Help,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    /// Wrap a fresh session; the help screen is shown first
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let buffer = GuessBuffer::new(session.config().code_length());

        Self {
            session,
            buffer,
            cursor: 0,
            input_mode: InputMode::Help,
            messages: vec![Message {
                text: "Pick colors to fill the current row.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            last_outcome: None,
            should_quit: false,
        }
    }

    /// Put the palette color at `index` into the next empty slot
    ///
    /// The row is scored as soon as its last slot is filled.
    pub fn pick_color(&mut self, index: usize) {
        if self.session.is_over() {
            return;
        }

        let Some(color) = self.session.config().palette().get(index).cloned() else {
            return;
        };

        self.cursor = index;
        if self.buffer.push(color) && self.buffer.is_complete() {
            self.submit();
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.session.config().palette().len();
        self.cursor = if forward {
            (self.cursor + 1) % len
        } else {
            (self.cursor + len - 1) % len
        };
    }

    pub fn undo_peg(&mut self) {
        if !self.session.is_over() {
            self.buffer.pop();
        }
    }

    fn submit(&mut self) {
        match self.session.submit_buffer(&self.buffer) {
            Ok(outcome) => {
                self.buffer.clear();
                self.handle_outcome(outcome);
            }
            Err(err @ (GameError::GameOver | GameError::IncompleteGuess { .. })) => {
                debug!(%err, "submission ignored");
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn handle_outcome(&mut self, outcome: SubmitOutcome) {
        let max = self.session.config().max_attempts();
        match outcome.status {
            GameStatus::Won => {
                self.stats.record(outcome.status, outcome.attempt);
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!("🎉 Cracked on try #{}!", outcome.attempt),
                    MessageStyle::Success,
                );
            }
            GameStatus::Lost => {
                self.stats.record(outcome.status, outcome.attempt);
                self.input_mode = InputMode::GameOver;
                self.add_message(&format!("All {max} tries used."), MessageStyle::Error);
            }
            GameStatus::InProgress => {
                self.add_message(
                    &format!(
                        "Try {}: {} exact, {} color only",
                        outcome.attempt, outcome.score.exact, outcome.score.color_only
                    ),
                    MessageStyle::Info,
                );
            }
        }
        self.last_outcome = Some(outcome);
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.buffer.reset(self.session.config().code_length());
        self.last_outcome = None;
        self.input_mode = InputMode::Playing;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn toggle_help(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Help if self.session.is_over() => InputMode::GameOver,
            InputMode::Help => InputMode::Playing,
            _ => InputMode::Help,
        };
    }

    /// The code, once the game has ended
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.session.revealed_secret()
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

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Help => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                _ => self.toggle_help(),
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('y' | 'n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('h' | '?') => self.toggle_help(),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('h' | '?') => self.toggle_help(),
                KeyCode::Char(c @ '1'..='9') => {
                    self.pick_color(c as usize - '1' as usize);
                }
                KeyCode::Left => self.move_cursor(false),
                KeyCode::Right => self.move_cursor(true),
                KeyCode::Char(' ') | KeyCode::Enter => self.pick_color(self.cursor),
                KeyCode::Backspace => self.undo_peg(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
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

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
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

    Ok(app.stats)
}
