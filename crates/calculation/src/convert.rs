//! Infix to postfix (Reverse Polish) conversion with an operator stack.

use crate::error::CalcError;
use crate::token::{precedence, Token};
use log::{debug, trace};

/// Converts a space-free infix expression into postfix order.
///
/// Digits go straight to the output. An operator first pops every stacked
/// operator, down to the nearest `(`, whose precedence is greater than or
/// equal to its own, which makes equal-precedence operators left-associative.
/// A `(` only leaves the stack through its matching `)`. Characters that are neither
/// digits nor parentheses are handled as operators with precedence -1.
///
/// # Errors
///
/// [`CalcError::UnbalancedParentheses`] when a `)` has no open `(` on the
/// stack, or when a `(` is still open once the input is exhausted.
///
/// # Example
///
/// ```
/// use calculation::infix_to_postfix;
///
/// assert_eq!(infix_to_postfix("2+3*4").unwrap(), "234*+");
/// assert_eq!(infix_to_postfix("(2+3)*4").unwrap(), "23+4*");
/// ```
pub fn infix_to_postfix(expression: &str) -> Result<String, CalcError> {
    let mut stack: Vec<char> = Vec::new();
    let mut postfix = String::with_capacity(expression.len());

    for c in expression.chars() {
        match Token::classify(c) {
            Token::Digit(d) => postfix.push(d),
            Token::LeftParen => stack.push(c),
            Token::RightParen => loop {
                match stack.pop() {
                    Some('(') => break,
                    Some(op) => postfix.push(op),
                    None => return Err(CalcError::UnbalancedParentheses),
                }
            },
            Token::Operator(_) => {
                let current = precedence(c);
                while let Some(&top) = stack.last() {
                    if top == '(' || precedence(top) < current {
                        break;
                    }
                    postfix.push(top);
                    stack.pop();
                }
                stack.push(c);
            }
        }
        trace!("{c:?}: stack={stack:?} output={postfix:?}");
    }

    while let Some(top) = stack.pop() {
        if top == '(' {
            return Err(CalcError::UnbalancedParentheses);
        }
        postfix.push(top);
    }

    debug!("infix {expression:?} -> postfix {postfix:?}");
    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operands_pass_through() {
        assert_eq!(infix_to_postfix("7").unwrap(), "7");
        assert_eq!(infix_to_postfix("23").unwrap(), "23");
        assert_eq!(infix_to_postfix("").unwrap(), "");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(infix_to_postfix("2+3*4").unwrap(), "234*+");
        assert_eq!(infix_to_postfix("2*3+4").unwrap(), "23*4+");
        assert_eq!(infix_to_postfix("8/4-1").unwrap(), "84/1-");
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(infix_to_postfix("8-4-2").unwrap(), "84-2-");
        assert_eq!(infix_to_postfix("8/4*2").unwrap(), "84/2*");
        assert_eq!(infix_to_postfix("1+2-3+4").unwrap(), "12+3-4+");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(infix_to_postfix("(2+3)*4").unwrap(), "23+4*");
        assert_eq!(infix_to_postfix("8-(4-2)").unwrap(), "842--");
        assert_eq!(infix_to_postfix("((1))").unwrap(), "1");
        assert_eq!(
            infix_to_postfix("2*(5-2)+4*7-(2+3)").unwrap(),
            "252-*47*+23+-"
        );
    }

    #[test]
    fn test_unmatched_close() {
        assert_eq!(infix_to_postfix("2+3)"), Err(CalcError::UnbalancedParentheses));
        assert_eq!(infix_to_postfix(")"), Err(CalcError::UnbalancedParentheses));
    }

    #[test]
    fn test_unmatched_open_at_flush() {
        assert_eq!(infix_to_postfix("(2+3"), Err(CalcError::UnbalancedParentheses));
        assert_eq!(infix_to_postfix("((2+3)"), Err(CalcError::UnbalancedParentheses));
        assert_eq!(infix_to_postfix("("), Err(CalcError::UnbalancedParentheses));
    }

    #[test]
    fn test_unrecognized_characters_are_pushed() {
        // Precedence -1 pops every stacked operator above the nearest `(`.
        assert_eq!(infix_to_postfix("2a3").unwrap(), "23a");
        assert_eq!(infix_to_postfix("2+3a4").unwrap(), "23+4a");
        assert_eq!(infix_to_postfix("(2+3a4)").unwrap(), "23+4a");
    }

    #[test]
    fn test_unrecognized_operator_leaves_open_paren_stacked() {
        assert_eq!(infix_to_postfix("(2a3)").unwrap(), "23a");
        assert_eq!(infix_to_postfix("1(2a3"), Err(CalcError::UnbalancedParentheses));
    }
}
