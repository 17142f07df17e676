//! Equatle
//!
//! A terminal Nerdle: guess the hidden 8-character arithmetic equation in
//! six tries. The engine pairs a target generator and equation validator
//! with a Wordle-style scorer that handles duplicate characters correctly.
//!
//! # Quick Start
//!
//! ```rust
//! use equatle::core::{Equation, Feedback};
//! use equatle::generator;
//!
//! // Generate a target and score a guess against it
//! let target = generator::generate();
//! assert!(Equation::is_valid(target.text()));
//!
//! let guess = Equation::new("12+34=46").unwrap();
//! let feedback = Feedback::calculate(&guess, &target);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Target generation
pub mod generator;

// Round state and keyboard coloring
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
