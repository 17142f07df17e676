//! One-shot scoring command
//!
//! Scores a guess against a known target and reports the feedback row.

use crate::core::{Equation, Feedback};

/// Result of scoring one guess against one target
pub struct ScoreReport {
    pub guess: Equation,
    pub target: Equation,
    pub feedback: Feedback,
}

/// Score a guess against a target
///
/// # Errors
///
/// Returns an error if either string is not a valid equation; scoring is
/// only defined over the fixed-length alphabet.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreReport, String> {
    let guess = Equation::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let target = Equation::new(target).map_err(|e| format!("Invalid target: {e}"))?;

    let feedback = Feedback::calculate(&guess, &target);

    Ok(ScoreReport {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    #[test]
    fn score_exact_match() {
        let report = score_guess("12+34=46", "12+34=46").unwrap();
        assert!(report.feedback.is_perfect());
        assert_eq!(report.feedback.count_correct(), 8);
    }

    #[test]
    fn score_duplicate_oracle() {
        let report = score_guess("22+11=33", "11+22=33").unwrap();
        let tiles = report.feedback.tiles();

        assert_eq!(tiles[0], Tile::Present);
        assert_eq!(tiles[1], Tile::Present);
        assert_eq!(tiles[2], Tile::Correct);
        assert_eq!(tiles[3], Tile::Present);
        assert_eq!(tiles[4], Tile::Present);
        assert_eq!(tiles[5], Tile::Correct);
        assert_eq!(tiles[6], Tile::Correct);
        assert_eq!(tiles[7], Tile::Correct);
    }

    #[test]
    fn score_rejects_invalid_inputs() {
        assert!(score_guess("12+34=47", "12+34=46").is_err());
        assert!(score_guess("12+34=46", "nonsense").is_err());
    }
}
