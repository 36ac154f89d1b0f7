//! Orchestration: strip spaces, convert to postfix, evaluate.

use crate::convert::infix_to_postfix;
use crate::error::CalcError;
use crate::evaluate::evaluate_postfix;
use crate::options::CalcOptions;
use crate::token::Token;

/// Removes every space character. Other whitespace is left in place.
pub fn strip_spaces(expression: &str) -> String {
    expression.replace(' ', "")
}

/// Rejects the first character that is not a digit, `+ - * /` or a parenthesis.
///
/// `position` in the returned error is a character index into `expression`.
pub fn validate(expression: &str) -> Result<(), CalcError> {
    match expression
        .chars()
        .enumerate()
        .find(|&(_, c)| !Token::classify(c).is_known())
    {
        Some((position, character)) => Err(CalcError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// A configured calculator. Holds no state besides its options, so one
/// instance can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    options: CalcOptions,
}

impl Calculator {
    pub fn new(options: CalcOptions) -> Self {
        Calculator { options }
    }

    pub fn options(&self) -> &CalcOptions {
        &self.options
    }

    /// Returns the postfix form of `expression` after stripping spaces.
    pub fn postfix(&self, expression: &str) -> Result<String, CalcError> {
        let cleaned = strip_spaces(expression);
        if self.options.reject_unknown_characters {
            validate(&cleaned)?;
        }
        infix_to_postfix(&cleaned)
    }

    /// Evaluates `expression`, returning the first error encountered.
    pub fn calc(&self, expression: &str) -> Result<f64, CalcError> {
        let postfix = self.postfix(expression)?;
        evaluate_postfix(&postfix, &self.options)
    }
}

/// Evaluates `expression` with default options.
///
/// # Example
///
/// ```
/// use calculation::calc;
///
/// assert_eq!(calc("2 * (5 - 2) + 4 * 7 - (2 + 3)").unwrap(), 29.0);
/// assert_eq!(calc("2/0").unwrap(), 0.0);
/// ```
pub fn calc(expression: &str) -> Result<f64, CalcError> {
    Calculator::default().calc(expression)
}

/// Evaluates `expression` with the given options.
pub fn calc_with(expression: &str, options: &CalcOptions) -> Result<f64, CalcError> {
    Calculator::new(*options).calc(expression)
}
