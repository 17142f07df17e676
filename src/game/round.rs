//! Single-round game state

use crate::core::{Equation, EquationError, Feedback};
use crate::generator;
use std::fmt;

/// Maximum number of guesses per round.
pub const MAX_ROWS: usize = 6;

/// One submitted guess together with its feedback
#[derive(Debug, Clone)]
pub struct ScoredGuess {
    pub equation: Equation,
    pub feedback: Feedback,
}

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a submission was rejected
///
/// Rejections don't consume a row; only scored guesses do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The round already ended
    RoundOver,
    /// The guess is not a valid equation
    Invalid(EquationError),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundOver => write!(f, "The round is already over"),
            Self::Invalid(err) => write!(f, "Not a valid equation: {err}"),
        }
    }
}

impl std::error::Error for GuessError {}

/// State of one game round: the target plus everything guessed so far
#[derive(Debug, Clone)]
pub struct Round {
    target: Equation,
    rows: Vec<ScoredGuess>,
    max_rows: usize,
}

impl Round {
    /// Start a round with a freshly generated target
    #[must_use]
    pub fn new() -> Self {
        Self::with_target(generator::generate())
    }

    /// Start a round against a known target (tests, `score` command)
    #[must_use]
    pub fn with_target(target: Equation) -> Self {
        Self {
            target,
            rows: Vec::new(),
            max_rows: MAX_ROWS,
        }
    }

    /// Submit a guess
    ///
    /// Validates the guess, scores it against the target and records the
    /// row. A perfect score wins the round; using up the last row without
    /// one loses it.
    ///
    /// # Errors
    /// - `GuessError::RoundOver` after a win or loss
    /// - `GuessError::Invalid` when the guess is not a valid equation
    ///   (the row is not consumed)
    pub fn submit(&mut self, guess: &str) -> Result<&ScoredGuess, GuessError> {
        if self.status() != RoundStatus::InProgress {
            return Err(GuessError::RoundOver);
        }

        let equation = Equation::new(guess).map_err(GuessError::Invalid)?;
        let feedback = Feedback::calculate(&equation, &self.target);

        self.rows.push(ScoredGuess { equation, feedback });
        // Safe: just pushed
        Ok(self.rows.last().expect("row just pushed"))
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.rows.last() {
            Some(row) if row.feedback.is_perfect() => RoundStatus::Won,
            _ if self.rows.len() >= self.max_rows => RoundStatus::Lost,
            _ => RoundStatus::InProgress,
        }
    }

    #[must_use]
    pub fn target(&self) -> &Equation {
        &self.target
    }

    /// Scored guesses in submission order
    #[must_use]
    pub fn rows(&self) -> &[ScoredGuess] {
        &self.rows
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
