//! Equatle - CLI
//!
//! Terminal Nerdle: guess the hidden 8-character arithmetic equation.
//! TUI and plain-CLI play modes plus check/score/generate utilities.

use anyhow::Result;
use clap::{Parser, Subcommand};
use equatle::{
    commands::{check_equation, run_generator_stats, run_simple, score_guess},
    generator,
    output::{print_check_result, print_generator_stats, print_score_report},
};

#[derive(Parser)]
#[command(
    name = "equatle",
    about = "Guess the hidden 8-character arithmetic equation in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Check whether a string is a valid, true equation
    Check {
        /// Candidate equation, e.g. "12+34=46"
        equation: String,
    },

    /// Score a guess against a known target
    Score {
        /// The guess equation
        guess: String,

        /// The target equation
        target: String,
    },

    /// Generate fresh target equations
    New {
        /// Number of targets to print
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },

    /// Generate many targets and report validity and distribution statistics
    Stats {
        /// Number of targets to generate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(),
        Commands::Simple => run_simple().map_err(|e| anyhow::anyhow!(e)),
        Commands::Check { equation } => {
            let result = check_equation(&equation);
            print_check_result(&result);
            Ok(())
        }
        Commands::Score { guess, target } => {
            let report = score_guess(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_report(&report);
            Ok(())
        }
        Commands::New { count } => {
            for _ in 0..count {
                println!("{}", generator::generate());
            }
            Ok(())
        }
        Commands::Stats { count } => {
            let stats = run_generator_stats(count);
            print_generator_stats(&stats);
            Ok(())
        }
    }
}

fn run_play_command() -> Result<()> {
    use equatle::interactive::{App, run_tui};

    let app = App::new();
    run_tui(app)
}
