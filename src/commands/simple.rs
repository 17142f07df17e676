//! Simple interactive CLI mode
//!
//! Text-based game without TUI: type equations, get colored feedback rows.

use crate::game::{GuessError, Round, RoundStatus};
use crate::output::formatters::{colored_row, feedback_to_emoji};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple() -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Equatle - Guess the Equation                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'm thinking of a true 8-character equation, e.g. 12+34=46.");
    println!("You have 6 guesses. After each one:\n");
    println!("  - 🟩 means the character is in the right spot");
    println!("  - 🟨 means it's in the equation, but elsewhere");
    println!("  - ⬜ means it's not in the equation (or all used up)\n");
    println!("Commands: 'quit' to exit, 'new' for a new game, 'reveal' to give up\n");

    let mut round = Round::new();
    log::info!("new round started");

    loop {
        let turn = round.guesses_used() + 1;
        let input = get_user_input(&format!(
            "Guess {turn}/{max} (or command)",
            max = round.max_rows()
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                round = Round::new();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "reveal" | "give up" => {
                println!(
                    "\nThe answer was {}\n",
                    round.target().text().bright_yellow().bold()
                );
                round = Round::new();
                println!("🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        match round.submit(&input) {
            Ok(row) => {
                println!(
                    "\n  {}  {}\n",
                    colored_row(&row.equation, row.feedback),
                    feedback_to_emoji(row.feedback)
                );
            }
            Err(GuessError::Invalid(reason)) => {
                println!("{} {reason}\n", "❌ Not a valid equation:".red());
                continue;
            }
            Err(GuessError::RoundOver) => continue,
        }

        match round.status() {
            RoundStatus::Won => {
                let turns = round.guesses_used();
                println!("{}", "═".repeat(66).bright_cyan());
                println!(
                    "{}",
                    "    🎉 ✨  E Q U A T I O N   S O L V E D !  ✨ 🎉    "
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(66).bright_cyan());

                let performance = match turns {
                    1 => "🏆 First try! Incredible!",
                    2 => "⭐ Two guesses! Outstanding!",
                    3 => "💫 Three guesses! Very sharp!",
                    4 => "✨ Four guesses! Nice work!",
                    5 => "👍 Five guesses! Got there!",
                    _ => "✓ Phew! Made it on the last row!",
                };
                println!("\n  {}", performance.bright_yellow().bold());

                println!("\n  Guess history:");
                for (i, row) in round.rows().iter().enumerate() {
                    println!(
                        "    {}. {} {}",
                        (i + 1).to_string().bright_black(),
                        row.equation.text().bright_white().bold(),
                        feedback_to_emoji(row.feedback)
                    );
                }
                println!("\n{}\n", "═".repeat(66).bright_cyan());

                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                round = Round::new();
                println!("\n🔄 New game started!\n");
            }
            RoundStatus::Lost => {
                println!(
                    "\n{} The answer was {}\n",
                    "💀 Out of guesses!".red().bold(),
                    round.target().text().bright_yellow().bold()
                );

                if !play_again()? {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                round = Round::new();
                println!("\n🔄 New game started!\n");
            }
            RoundStatus::InProgress => {}
        }
    }
}

fn play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?
            .to_lowercase()
            .as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
