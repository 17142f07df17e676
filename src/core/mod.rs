//! Core domain types for the equation-guessing game
//!
//! This module contains the fundamental domain types with zero external
//! side effects. All types here are pure value types: validation, evaluation
//! and scoring are deterministic functions over immutable strings.

mod equation;
mod eval;
mod feedback;

pub use equation::{ALPHABET, Equation, EquationError, TARGET_LEN};
pub use feedback::{Feedback, Tile};
