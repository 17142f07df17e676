//! Round state and keyboard coloring
//!
//! The core engine is stateless; everything a round of play accumulates
//! (target, scored guesses, win/lose status, key colors) lives here.

mod keyboard;
mod round;

pub use keyboard::{KeyState, KeyboardState};
pub use round::{GuessError, MAX_ROWS, Round, RoundStatus, ScoredGuess};
