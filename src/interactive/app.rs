//! TUI application state and logic

use crate::core::{ALPHABET, TARGET_LEN};
use crate::game::{GuessError, KeyboardState, Round, RoundStatus};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub round: Round,
    pub keyboard: KeyboardState,
    /// Characters typed into the current row, at most 8
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub reveal_answer: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = number of guesses used on a win (1-6)
    pub guess_distribution: [usize; 7],
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            round: Round::new(),
            keyboard: KeyboardState::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Guess the hidden 8-character equation!".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type an equation like 12+34=46 and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            reveal_answer: false,
            should_quit: false,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        if self.round.status() != RoundStatus::InProgress {
            return;
        }
        if self.input_buffer.len() >= TARGET_LEN {
            return;
        }
        if ch.is_ascii() && ALPHABET.contains(&(ch as u8)) {
            self.input_buffer.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.round.status() == RoundStatus::InProgress {
            self.input_buffer.pop();
        }
    }

    pub fn submit_guess(&mut self) {
        if self.round.status() != RoundStatus::InProgress {
            return;
        }
        if self.input_buffer.len() != TARGET_LEN {
            self.add_message(
                &format!("Equation must be exactly {TARGET_LEN} characters"),
                MessageStyle::Error,
            );
            return;
        }

        let guess = self.input_buffer.clone();
        match self.round.submit(&guess) {
            Ok(row) => {
                self.keyboard.record(&row.equation, row.feedback);
                self.input_buffer.clear();
                self.handle_round_end();
            }
            Err(GuessError::Invalid(reason)) => {
                self.add_message(&format!("Not a valid equation: {reason}"), MessageStyle::Error);
            }
            Err(GuessError::RoundOver) => {}
        }
    }

    fn handle_round_end(&mut self) {
        match self.round.status() {
            RoundStatus::Won => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                let used = self.round.guesses_used();
                if used < self.stats.guess_distribution.len() {
                    self.stats.guess_distribution[used] += 1;
                }

                let celebration = match used {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it on the last row! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::Lost => {
                self.stats.total_games += 1;
                let answer = self.round.target().text().to_string();
                self.add_message(
                    &format!("💀 Out of guesses! The answer was {answer}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            RoundStatus::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.round = Round::new();
        self.keyboard.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.reveal_answer = false;
        self.add_message("New game started!", MessageStyle::Info);
        log::info!("new TUI round started");
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_answer = !self.reveal_answer;
        if self.reveal_answer {
            let answer = self.round.target().text().to_string();
            self.add_message(&format!("Answer: {answer}"), MessageStyle::Info);
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

impl Default for App {
    fn default() -> Self {
        Self::new()
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                // Letters are never equation characters, so these are safe
                // at any point in a round
                KeyCode::Char('q') => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') => {
                    app.new_game();
                }
                KeyCode::Char('r') => {
                    app.toggle_reveal();
                }
                KeyCode::Char(c) => {
                    app.push_char(c);
                }
                KeyCode::Backspace => {
                    app.backspace();
                }
                KeyCode::Enter => {
                    app.submit_guess();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
