//! Arithmetic expression evaluation
//!
//! Evaluates one side of an equation: non-negative integer literals joined by
//! the four binary operators, no parentheses, no unary minus. `*` and `/`
//! bind tighter than `+` and `-`; operators of equal precedence apply left to
//! right. Division is real (f64) division.
//!
//! Evaluation is total: malformed input and non-finite results yield `None`.

/// Evaluate an expression over `digit+ (op digit+)*`
///
/// Returns `None` for empty input, an operator at a boundary, two adjacent
/// operators, a leading-zero literal, any byte outside the grammar, or a
/// non-finite result (e.g. division by zero).
pub(crate) fn evaluate(expr: &[u8]) -> Option<f64> {
    let mut pos = 0;

    // Running total of flushed terms plus the term under construction.
    // '+'/'-' flush the term; '*'/'/' fold into it, which gives the
    // multiplicative operators higher precedence in a single pass.
    let mut total = 0.0;
    let mut term = parse_literal(expr, &mut pos)?;

    while pos < expr.len() {
        let op = expr[pos];
        pos += 1;
        let operand = parse_literal(expr, &mut pos)?;

        match op {
            b'*' => term *= operand,
            b'/' => term /= operand,
            b'+' => {
                total += term;
                term = operand;
            }
            b'-' => {
                total += term;
                term = -operand;
            }
            _ => return None,
        }
    }

    let value = total + term;
    value.is_finite().then_some(value)
}

/// Parse one integer literal starting at `*pos`, advancing past it.
///
/// Rejects an empty digit run and multi-digit literals starting with '0'.
fn parse_literal(expr: &[u8], pos: &mut usize) -> Option<f64> {
    let start = *pos;
    while *pos < expr.len() && expr[*pos].is_ascii_digit() {
        *pos += 1;
    }

    let digits = &expr[start..*pos];
    if digits.is_empty() {
        return None;
    }
    if digits[0] == b'0' && digits.len() > 1 {
        return None;
    }

    let mut value = 0.0;
    for &d in digits {
        value = value * 10.0 + f64::from(d - b'0');
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Option<f64> {
        evaluate(s.as_bytes())
    }

    #[test]
    fn evaluate_single_literal() {
        assert_eq!(eval("0"), Some(0.0));
        assert_eq!(eval("7"), Some(7.0));
        assert_eq!(eval("46"), Some(46.0));
        assert_eq!(eval("190"), Some(190.0));
    }

    #[test]
    fn evaluate_basic_operations() {
        assert_eq!(eval("12+34"), Some(46.0));
        assert_eq!(eval("99-1"), Some(98.0));
        assert_eq!(eval("12*13"), Some(156.0));
        assert_eq!(eval("96/8"), Some(12.0));
    }

    #[test]
    fn evaluate_real_division() {
        assert_eq!(eval("7/2"), Some(3.5));
        assert_eq!(eval("1/4"), Some(0.25));
    }

    #[test]
    fn evaluate_precedence() {
        // * and / before + and -
        assert_eq!(eval("2+3*4"), Some(14.0));
        assert_eq!(eval("12-3*4"), Some(0.0));
        assert_eq!(eval("2*3+4*5"), Some(26.0));
        assert_eq!(eval("10-8/4"), Some(8.0));
    }

    #[test]
    fn evaluate_left_associativity() {
        assert_eq!(eval("10-2-3"), Some(5.0));
        assert_eq!(eval("24/8/3"), Some(1.0));
        assert_eq!(eval("2*3*4"), Some(24.0));
    }

    #[test]
    fn evaluate_subtraction_can_go_negative() {
        // The evaluator itself is happy with negative values; the generator
        // never produces them, and a negative side simply won't equal a
        // non-negative one.
        assert_eq!(eval("1-34"), Some(-33.0));
    }

    #[test]
    fn evaluate_division_by_zero() {
        assert_eq!(eval("8/0"), None);
        assert_eq!(eval("5+8/0"), None);
    }

    #[test]
    fn evaluate_malformed() {
        assert_eq!(eval(""), None);
        assert_eq!(eval("+12"), None);
        assert_eq!(eval("12+"), None);
        assert_eq!(eval("1++2"), None);
        assert_eq!(eval("1+*2"), None);
        assert_eq!(eval("+"), None);
    }

    #[test]
    fn evaluate_leading_zero_rejected() {
        assert_eq!(eval("07"), None);
        assert_eq!(eval("1+02"), None);
        assert_eq!(eval("012"), None);
        // bare zero is fine
        assert_eq!(eval("0+1"), Some(1.0));
    }

    #[test]
    fn evaluate_rejects_foreign_bytes() {
        assert_eq!(eval("1=2"), None);
        assert_eq!(eval("1.5"), None);
        assert_eq!(eval("a+b"), None);
    }
}
