//! Formatting utilities for terminal output

use crate::core::{Equation, Feedback, Tile};
use colored::Colorize;

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback.to_emoji()
}

/// Format a scored guess as a colored character row
///
/// Correct characters on green, present on yellow, absent dimmed.
#[must_use]
pub fn colored_row(guess: &Equation, feedback: Feedback) -> String {
    let tiles = feedback.tiles();
    guess
        .text()
        .chars()
        .zip(tiles.iter())
        .map(|(ch, tile)| {
            let cell = format!(" {ch} ");
            match tile {
                Tile::Correct => cell.black().on_green().to_string(),
                Tile::Present => cell.black().on_yellow().to_string(),
                Tile::Absent => cell.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
