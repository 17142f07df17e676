//! Equation checking command
//!
//! Diagnoses whether a candidate string is a valid, true equation and, when
//! it isn't, names the first rule it breaks.

use crate::core::{Equation, EquationError};

/// Result of checking a candidate equation
///
/// Checking is total: bad input produces a diagnosis, never an error.
pub struct CheckResult {
    pub input: String,
    pub verdict: Result<Equation, EquationError>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check a candidate equation string
#[must_use]
pub fn check_equation(input: &str) -> CheckResult {
    CheckResult {
        input: input.to_string(),
        verdict: Equation::new(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_valid_equation() {
        let result = check_equation("12+34=46");
        assert!(result.is_valid());
        assert_eq!(result.input, "12+34=46");
    }

    #[test]
    fn check_reports_the_violated_rule() {
        assert!(matches!(
            check_equation("1+1=2").verdict,
            Err(EquationError::InvalidLength(5))
        ));
        assert!(matches!(
            check_equation("12+34=47").verdict,
            Err(EquationError::NotTrue)
        ));
        assert!(matches!(
            check_equation("10+05=15").verdict,
            Err(EquationError::LeadingZero)
        ));
    }

    #[test]
    fn check_never_panics_on_junk() {
        for junk in ["", "========", "////////", "\u{1f600}\u{1f600}", "1+1=2=2+"] {
            let _ = check_equation(junk);
        }
    }
}
