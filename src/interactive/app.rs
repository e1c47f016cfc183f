//! TUI application state and logic

use crate::dictionary::SpellChecker;
use crate::game::{Rejection, Session, SessionError, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session,
    /// Rejection waiting to be acknowledged; input is blocked while set
    pub alert: Option<Rejection>,
    pub messages: Vec<Message>,
    pub games_started: usize,
    pub should_quit: bool,
    word_list: &'a [String],
    checker: &'a dyn SpellChecker,
    rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start its first session
    ///
    /// # Errors
    ///
    /// Returns an error if `word_list` has no usable root words.
    pub fn new(
        word_list: &'a [String],
        checker: &'a dyn SpellChecker,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let session = Session::start_with_rng(word_list, &mut rng)?;

        Ok(Self {
            session,
            alert: None,
            messages: vec![Message {
                text: "Make as many words as you can from the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            games_started: 1,
            should_quit: false,
            word_list,
            checker,
            rng,
        })
    }

    /// Submit the current draft
    pub fn submit(&mut self) {
        match self.session.submit_draft(self.checker) {
            SubmitOutcome::Accepted(word) => {
                self.add_message(&format!("Found '{word}'"), MessageStyle::Success);
            }
            SubmitOutcome::Rejected(rejection) => {
                self.alert = Some(rejection);
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Acknowledge the current alert, if any
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Replace the session with a fresh one on a new root word
    ///
    /// # Errors
    ///
    /// Returns an error if the word list has no usable root words.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        self.session = Session::start_with_rng(self.word_list, &mut self.rng)?;
        self.alert = None;
        self.games_started += 1;
        self.add_message(
            &format!("New game! Root word: {}", self.session.root()),
            MessageStyle::Info,
        );
        Ok(())
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
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Err(err) = self.new_game() {
                    self.add_message(&err.to_string(), MessageStyle::Error);
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.session.draft_mut().push(c);
            }
            KeyCode::Backspace => {
                self.session.draft_mut().pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.should_quit = true,
            _ => {}
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(
        games = app.games_started,
        words = app.session.accepted().len(),
        "tui closed"
    );
    Ok(())
}
