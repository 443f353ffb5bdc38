// Unit tests for the constrained arithmetic evaluator
//
// The evaluator receives untrusted text; these tests cover both the
// arithmetic it must accept and the input it must reject.

use voice_calc::{evaluate, EvalError};

#[test]
fn test_addition() {
    assert_eq!(evaluate("5+3").unwrap(), 8.0);
}

#[test]
fn test_whitespace_ignored() {
    assert_eq!(evaluate(" 5 +  3 ").unwrap(), 8.0);
}

#[test]
fn test_standard_precedence() {
    assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
    assert_eq!(evaluate("10-4/2").unwrap(), 8.0);
}

#[test]
fn test_parentheses() {
    assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
}

#[test]
fn test_power() {
    assert_eq!(evaluate("7**2").unwrap(), 49.0);
    assert_eq!(evaluate("2**3").unwrap(), 8.0);
}

#[test]
fn test_power_right_associative() {
    // 2**(3**2), not (2**3)**2
    assert_eq!(evaluate("2**3**2").unwrap(), 512.0);
}

#[test]
fn test_power_binds_tighter_than_multiplication() {
    assert_eq!(evaluate("3*2**2").unwrap(), 12.0);
}

#[test]
fn test_unary_minus() {
    assert_eq!(evaluate("-4+10").unwrap(), 6.0);
    assert_eq!(evaluate("-(2+3)").unwrap(), -5.0);
}

#[test]
fn test_decimals() {
    assert_eq!(evaluate("1.5*2").unwrap(), 3.0);
    assert_eq!(evaluate(".5+.5").unwrap(), 1.0);
}

#[test]
fn test_percent_expansion() {
    assert_eq!(evaluate("10/100").unwrap(), 0.1);
}

#[test]
fn test_division_by_zero_rejected() {
    assert_eq!(evaluate("10/0"), Err(EvalError::NonFinite));
}

#[test]
fn test_zero_over_zero_rejected() {
    // 0/0 is NaN rather than infinite; both are non-finite
    assert_eq!(evaluate("0/0"), Err(EvalError::NonFinite));
}

#[test]
fn test_identifiers_rejected() {
    assert_eq!(evaluate("alert(1)"), Err(EvalError::UnexpectedChar('a')));
}

#[test]
fn test_assignment_rejected() {
    assert_eq!(evaluate("1=2"), Err(EvalError::UnexpectedChar('=')));
}

#[test]
fn test_statement_sequences_rejected() {
    assert_eq!(evaluate("1;2"), Err(EvalError::UnexpectedChar(';')));
}

#[test]
fn test_empty_rejected() {
    assert_eq!(evaluate(""), Err(EvalError::Empty));
    assert_eq!(evaluate("   "), Err(EvalError::Empty));
}

#[test]
fn test_trailing_input_rejected() {
    assert_eq!(evaluate("5 5"), Err(EvalError::TrailingInput));
}

#[test]
fn test_dangling_operator_rejected() {
    assert_eq!(evaluate("5+"), Err(EvalError::UnexpectedEnd));
}

#[test]
fn test_unclosed_paren_rejected() {
    assert_eq!(evaluate("(1+2"), Err(EvalError::UnexpectedEnd));
}

#[test]
fn test_malformed_number_rejected() {
    assert_eq!(
        evaluate("1.2.3"),
        Err(EvalError::MalformedNumber("1.2.3".to_string()))
    );
}
