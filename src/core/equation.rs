//! Equation representation and validation
//!
//! An Equation stores an 8-character arithmetic equation (e.g. "12+34=46")
//! that has been checked against the full game rules: alphabet, grammar,
//! leading zeros, and arithmetic truth.

use super::eval::evaluate;
use rustc_hash::FxHashMap;
use std::fmt;

/// Fixed length of every target and guess string.
pub const TARGET_LEN: usize = 8;

/// Characters an equation may contain.
pub const ALPHABET: &[u8] = b"0123456789+-*/=";

/// Absolute tolerance when comparing the two sides of an equation.
///
/// Division is real (floating-point) division, so e.g. "100/8=12" is false
/// (12.5 != 12) while "100/4=25" is true. The tolerance absorbs float error
/// on division chains without changing which integer equations are accepted.
const EQ_TOLERANCE: f64 = 1e-9;

/// A validated 8-character arithmetic equation
///
/// Construction guarantees the string is a syntactically valid, arithmetically
/// true equation. Stores the characters as bytes for positional access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    text: String,
    chars: [u8; TARGET_LEN],
}

/// Reasons a candidate string is not a valid equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    InvalidLength(usize),
    InvalidCharacter(char),
    /// Not exactly one '=' in the string
    EqualsCount(usize),
    /// A side is empty or breaks the `digit+ (op digit+)*` grammar
    MalformedExpression,
    /// A multi-digit literal starts with '0'
    LeadingZero,
    /// Both sides parse but are not numerically equal
    NotTrue,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Equation must be exactly {TARGET_LEN} characters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Invalid character '{ch}' (allowed: 0-9 + - * / =)")
            }
            Self::EqualsCount(count) => {
                write!(f, "Equation must contain exactly one '=', got {count}")
            }
            Self::MalformedExpression => {
                write!(f, "Each side must be numbers separated by single operators")
            }
            Self::LeadingZero => write!(f, "Numbers may not have leading zeros"),
            Self::NotTrue => write!(f, "Left and right sides are not equal"),
        }
    }
}

impl std::error::Error for EquationError {}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if:
    /// - Length is not exactly 8
    /// - Any character is outside `0-9 + - * / =`
    /// - There is not exactly one '='
    /// - Either side breaks the expression grammar or has a leading zero
    /// - The two sides do not evaluate to the same value
    ///
    /// # Examples
    /// ```
    /// use equatle::core::Equation;
    ///
    /// let eq = Equation::new("12+34=46").unwrap();
    /// assert_eq!(eq.text(), "12+34=46");
    ///
    /// assert!(Equation::new("12+34=47").is_err());
    /// assert!(Equation::new("1+1=2").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        // Validate length in characters; the alphabet is ASCII, so once the
        // character check passes chars == bytes
        let char_len = text.chars().count();
        if char_len != TARGET_LEN {
            return Err(EquationError::InvalidLength(char_len));
        }

        if let Some(bad) = text.chars().find(|&c| !c.is_ascii() || !ALPHABET.contains(&(c as u8)))
        {
            return Err(EquationError::InvalidCharacter(bad));
        }

        let equals_count = text.bytes().filter(|&b| b == b'=').count();
        if equals_count != 1 {
            return Err(EquationError::EqualsCount(equals_count));
        }

        // Safe: exactly one '=' was just verified
        let (left, right) = text
            .split_once('=')
            .expect("equals count already validated");

        let lhs = check_side(left.as_bytes())?;
        let rhs = check_side(right.as_bytes())?;

        if (lhs - rhs).abs() >= EQ_TOLERANCE {
            return Err(EquationError::NotTrue);
        }

        let chars: [u8; TARGET_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Check whether a string is a valid, true equation
    ///
    /// Total boolean predicate: any malformed input (wrong length, bad
    /// characters, grammar violations, false arithmetic) yields `false`,
    /// never an error.
    ///
    /// # Examples
    /// ```
    /// use equatle::core::Equation;
    ///
    /// assert!(Equation::is_valid("12+34=46"));
    /// assert!(!Equation::is_valid("12+34=47"));
    /// assert!(!Equation::is_valid("7/2=3.5"));
    /// ```
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        Self::new(text).is_ok()
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; TARGET_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-7)
    ///
    /// # Panics
    /// Panics if position >= 8
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each character in the equation
    ///
    /// Used for feedback calculation with duplicate characters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Validate and evaluate one side of the equation.
///
/// Distinguishes leading-zero literals from other grammar violations so the
/// error can name the real problem; evaluation itself treats both as None.
fn check_side(expr: &[u8]) -> Result<f64, EquationError> {
    if has_leading_zero(expr) {
        return Err(EquationError::LeadingZero);
    }
    evaluate(expr).ok_or(EquationError::MalformedExpression)
}

/// Does any literal in the expression have a leading zero?
///
/// A literal is a maximal digit run; "0" alone is fine, "07" is not.
fn has_leading_zero(expr: &[u8]) -> bool {
    let mut i = 0;
    while i < expr.len() {
        if expr[i].is_ascii_digit() {
            let start = i;
            while i < expr.len() && expr[i].is_ascii_digit() {
                i += 1;
            }
            if expr[start] == b'0' && i - start > 1 {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_creation_valid() {
        let eq = Equation::new("12+34=46").unwrap();
        assert_eq!(eq.text(), "12+34=46");
        assert_eq!(eq.chars(), b"12+34=46");
    }

    #[test]
    fn equation_creation_wrong_length() {
        assert!(matches!(
            Equation::new("1+1=2"),
            Err(EquationError::InvalidLength(5))
        ));
        assert!(matches!(
            Equation::new("11+22+33=66"),
            Err(EquationError::InvalidLength(11))
        ));
        assert!(matches!(
            Equation::new(""),
            Err(EquationError::InvalidLength(0))
        ));
    }

    #[test]
    fn equation_creation_invalid_characters() {
        assert!(matches!(
            Equation::new("7/2=3.50"),
            Err(EquationError::InvalidCharacter('.'))
        ));
        assert!(matches!(
            Equation::new("12+34=4x"),
            Err(EquationError::InvalidCharacter('x'))
        ));
        assert!(matches!(
            Equation::new("12 +34=4"),
            Err(EquationError::InvalidCharacter(' '))
        ));
    }

    #[test]
    fn equation_creation_equals_count() {
        assert!(matches!(
            Equation::new("12345678"),
            Err(EquationError::EqualsCount(0))
        ));
        assert!(matches!(
            Equation::new("12=34=46"),
            Err(EquationError::EqualsCount(2))
        ));
    }

    #[test]
    fn equation_creation_malformed_expressions() {
        // Operator at a boundary
        assert!(matches!(
            Equation::new("+12+3=15"),
            Err(EquationError::MalformedExpression)
        ));
        assert!(matches!(
            Equation::new("12+3=15+"),
            Err(EquationError::MalformedExpression)
        ));
        // Double operator
        assert!(matches!(
            Equation::new("1++34=35"),
            Err(EquationError::MalformedExpression)
        ));
        // Empty left side
        assert!(matches!(
            Equation::new("=12+3446"),
            Err(EquationError::MalformedExpression)
        ));
    }

    #[test]
    fn equation_creation_leading_zero() {
        assert!(matches!(
            Equation::new("10+05=15"),
            Err(EquationError::LeadingZero)
        ));
        assert!(matches!(
            Equation::new("05+10=15"),
            Err(EquationError::LeadingZero)
        ));
    }

    #[test]
    fn equation_bare_zero_literal_allowed() {
        // "0" by itself is a valid literal
        let eq = Equation::new("12*0=0+0").unwrap();
        assert_eq!(eq.text(), "12*0=0+0");
    }

    #[test]
    fn equation_creation_not_true() {
        assert!(matches!(
            Equation::new("12+34=47"),
            Err(EquationError::NotTrue)
        ));
        assert!(matches!(
            Equation::new("19*9=170"),
            Err(EquationError::NotTrue)
        ));
    }

    #[test]
    fn is_valid_spec_examples() {
        assert!(Equation::is_valid("12+34=46"));
        assert!(Equation::is_valid("11+11=22"));
        assert!(!Equation::is_valid("7/2=3.5")); // bad char (and wrong length)
        assert!(!Equation::is_valid("07+1=08")); // leading zero (and wrong length)
        assert!(!Equation::is_valid("1+1=2")); // wrong length
        assert!(!Equation::is_valid("6/2=3")); // true, but not 8 chars
    }

    #[test]
    fn is_valid_real_division() {
        // Division is real division, not truncating
        assert!(Equation::is_valid("100/4=25"));
        assert!(!Equation::is_valid("100/8=12")); // 12.5 != 12
        assert!(Equation::is_valid("24/8/3=1")); // left-to-right chain
    }

    #[test]
    fn is_valid_division_by_zero() {
        // Non-finite result is invalid, not an error
        assert!(!Equation::is_valid("120/0=12"));
    }

    #[test]
    fn is_valid_operator_precedence() {
        // * binds tighter than +
        assert!(Equation::is_valid("2+3*4=14"));
        assert!(!Equation::is_valid("2+3*4=20"));
        assert!(Equation::is_valid("12-3*4=0"));
    }

    #[test]
    fn is_valid_left_associative_subtraction() {
        assert!(Equation::is_valid("10-2-3=5"));
        assert!(!Equation::is_valid("10-2-3=9"));
    }

    #[test]
    fn is_valid_is_deterministic() {
        for _ in 0..3 {
            assert!(Equation::is_valid("12+34=46"));
            assert!(!Equation::is_valid("12+34=47"));
        }
    }

    #[test]
    fn equation_char_at() {
        let eq = Equation::new("12+34=46").unwrap();
        assert_eq!(eq.char_at(0), b'1');
        assert_eq!(eq.char_at(2), b'+');
        assert_eq!(eq.char_at(5), b'=');
        assert_eq!(eq.char_at(7), b'6');
    }

    #[test]
    fn equation_char_counts() {
        let eq = Equation::new("11+22=33").unwrap();
        let counts = eq.char_counts();
        assert_eq!(counts.get(&b'1'), Some(&2));
        assert_eq!(counts.get(&b'2'), Some(&2));
        assert_eq!(counts.get(&b'3'), Some(&2));
        assert_eq!(counts.get(&b'+'), Some(&1));
        assert_eq!(counts.get(&b'='), Some(&1));
        assert_eq!(counts.get(&b'9'), None);
    }

    #[test]
    fn equation_display_and_from_str() {
        let eq: Equation = "12+34=46".parse().unwrap();
        assert_eq!(format!("{eq}"), "12+34=46");
        assert!("12+34=47".parse::<Equation>().is_err());
    }
}
