//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard and status panels for the equation game.

use super::app::{App, Message, MessageStyle};
use crate::core::{TARGET_LEN, Tile};
use crate::game::{KeyState, RoundStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Keyboard layout, matching the on-screen key rows of the game
const KEY_ROWS: [&str; 3] = ["789+-", "456*/", "1230="];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board + side panel
            Constraint::Length(5),  // Keyboard
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, &app.messages, main_chunks[1]);

    render_keyboard(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 EQUATLE - Guess the Equation")
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

fn tile_style(tile: Tile) -> Style {
    match tile {
        Tile::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Tile::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Tile::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let rows = app.round.rows();
    let mut lines: Vec<Line> = Vec::with_capacity(app.round.max_rows() * 2);

    for r in 0..app.round.max_rows() {
        let mut spans: Vec<Span> = vec![Span::raw("  ")];

        if let Some(row) = rows.get(r) {
            // Completed row: colored tiles
            let tiles = row.feedback.tiles();
            for (i, ch) in row.equation.text().chars().enumerate() {
                spans.push(Span::styled(format!(" {ch} "), tile_style(tiles[i])));
                spans.push(Span::raw(" "));
            }
        } else if r == rows.len() && app.round.status() == RoundStatus::InProgress {
            // Active row: typed characters plus empty cells
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..TARGET_LEN {
                if let Some(&ch) = typed.get(i) {
                    spans.push(Span::styled(
                        format!(" {ch} "),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    ));
                } else {
                    spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                }
                spans.push(Span::raw(" "));
            }
        } else {
            // Future row: empty cells
            for _ in 0..TARGET_LEN {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(state: Option<KeyState>) -> Style {
    match state {
        Some(KeyState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(KeyState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(KeyState::Absent) => Style::default().fg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::with_capacity(KEY_ROWS.len());

    for row in KEY_ROWS {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for ch in row.chars() {
            let state = app.keyboard.state_of(ch as u8);
            spans.push(Span::styled(format!(" {ch} "), key_style(state)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round_text = format!(
        "Guess {}/{}",
        (app.round.guesses_used() + 1).min(app.round.max_rows()),
        app.round.max_rows()
    );
    f.render_widget(Paragraph::new(round_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let answer_text = if app.reveal_answer {
        format!("Answer: {}", app.round.target().text())
    } else {
        String::from("Answer hidden ('r' reveals)")
    };
    f.render_widget(
        Paragraph::new(answer_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | n: New Game | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
