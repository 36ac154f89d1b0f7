//! Postfix evaluation with an operand stack.

use crate::error::CalcError;
use crate::options::CalcOptions;
use crate::token::{Operator, Token};
use log::{debug, trace};

/// Evaluates a postfix sequence produced by
/// [`infix_to_postfix`](crate::infix_to_postfix).
///
/// Each digit is pushed as a value. Every other character is a binary
/// operator: it pops `operand2` then `operand1` and pushes
/// `operand1 <op> operand2`. Exactly one value must remain at the end.
///
/// # Errors
///
/// - [`CalcError::InsufficientOperands`] when an operator finds fewer than two values.
/// - [`CalcError::MalformedExpression`] when the final stack does not hold exactly one value.
/// - [`CalcError::NumericParseError`] when a digit fails to parse.
/// - [`CalcError::DivisionByZero`] only with `division_by_zero_error` set.
pub fn evaluate_postfix(postfix: &str, options: &CalcOptions) -> Result<f64, CalcError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for c in postfix.chars() {
        match Token::classify(c) {
            Token::Digit(d) => {
                let mut buf = [0u8; 4];
                let value: f64 = d.encode_utf8(&mut buf).parse()?;
                stack.push(value);
            }
            _ => {
                let (Some(operand2), Some(operand1)) = (stack.pop(), stack.pop()) else {
                    return Err(CalcError::InsufficientOperands);
                };
                let result = apply(Operator::from_symbol(c), operand1, operand2, options)?;
                stack.push(result);
            }
        }
        trace!("{c:?}: stack={stack:?}");
    }

    match stack.as_slice() {
        [result] => {
            debug!("postfix {postfix:?} = {result}");
            Ok(*result)
        }
        _ => Err(CalcError::MalformedExpression),
    }
}

/// Applies a binary operator as `operand1 <op> operand2`.
///
/// A zero divisor yields `0` unless `division_by_zero_error` is set. An
/// unrecognized operator yields `0`.
pub fn apply(
    operator: Operator,
    operand1: f64,
    operand2: f64,
    options: &CalcOptions,
) -> Result<f64, CalcError> {
    Ok(match operator {
        Operator::Add => operand1 + operand2,
        Operator::Subtract => operand1 - operand2,
        Operator::Multiply => operand1 * operand2,
        Operator::Divide => {
            if operand2 == 0.0 {
                if options.division_by_zero_error {
                    return Err(CalcError::DivisionByZero);
                }
                debug!("{operand1} / 0 evaluates to 0");
                0.0
            } else {
                operand1 / operand2
            }
        }
        Operator::Unrecognized(c) => {
            debug!("unrecognized operator {c:?} evaluates to 0");
            0.0
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(postfix: &str) -> Result<f64, CalcError> {
        evaluate_postfix(postfix, &CalcOptions::default())
    }

    #[test]
    fn test_single_operand() {
        assert_eq!(eval("0"), Ok(0.0));
        assert_eq!(eval("9"), Ok(9.0));
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(eval("82-"), Ok(6.0));
        assert_eq!(eval("84/"), Ok(2.0));
        assert_eq!(eval("28/"), Ok(0.25));
    }

    #[test]
    fn test_nested() {
        assert_eq!(eval("234*+"), Ok(14.0));
        assert_eq!(eval("252-*47*+23+-"), Ok(29.0));
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(eval("+"), Err(CalcError::InsufficientOperands));
        assert_eq!(eval("2+"), Err(CalcError::InsufficientOperands));
        assert_eq!(eval("23+*"), Err(CalcError::InsufficientOperands));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(eval(""), Err(CalcError::MalformedExpression));
        assert_eq!(eval("23"), Err(CalcError::MalformedExpression));
        assert_eq!(eval("234+"), Err(CalcError::MalformedExpression));
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        assert_eq!(eval("20/"), Ok(0.0));
        assert_eq!(eval("00/"), Ok(0.0));
        assert_eq!(eval("20/3+"), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero_error() {
        let opts = CalcOptions::default().strict_division();
        assert_eq!(
            evaluate_postfix("20/", &opts),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(evaluate_postfix("21/", &opts), Ok(2.0));
    }

    #[test]
    fn test_unrecognized_operator_yields_zero() {
        assert_eq!(eval("23a"), Ok(0.0));
        assert_eq!(eval("23a4+"), Ok(4.0));
    }

    #[test]
    fn test_apply() {
        let opts = CalcOptions::default();
        assert_eq!(apply(Operator::Add, 1.0, 2.0, &opts), Ok(3.0));
        assert_eq!(apply(Operator::Subtract, 1.0, 2.0, &opts), Ok(-1.0));
        assert_eq!(apply(Operator::Multiply, 3.0, 2.0, &opts), Ok(6.0));
        assert_eq!(apply(Operator::Divide, 1.0, 4.0, &opts), Ok(0.25));
        assert_eq!(apply(Operator::Divide, 5.0, 0.0, &opts), Ok(0.0));
    }
}
