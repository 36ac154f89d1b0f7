//! Arithmetic expression evaluator.
//!
//! # Overview
//!
//! Expressions are evaluated in two passes: an operator-precedence conversion
//! from infix to postfix (Reverse Polish) order, then a stack evaluation of
//! the postfix sequence.
//!
//! Supported input is deliberately small: single-digit operands `0`-`9`, the
//! binary operators `+ - * /` and parentheses. Spaces are ignored. There are
//! no multi-digit numbers, decimals, negative numbers or unary operators:
//! `"23"` is two operands with no operator between them and fails with
//! [`CalcError::MalformedExpression`].
//!
//! Division by zero evaluates to `0` rather than failing, unless
//! [`CalcOptions::division_by_zero_error`] is set.
//!
//! # Example
//!
//! ```
//! use calculation::{calc, CalcError, CalcOptions, Calculator};
//!
//! assert_eq!(calc("2+3*4").unwrap(), 14.0);
//! assert_eq!(calc("(2+3)*4").unwrap(), 20.0);
//! assert_eq!(calc("(2+3"), Err(CalcError::UnbalancedParentheses));
//!
//! let strict = Calculator::new(CalcOptions::default().strict_division());
//! assert_eq!(strict.calc("2/0"), Err(CalcError::DivisionByZero));
//! ```

pub mod calc;
pub mod cli;
pub mod convert;
pub mod error;
pub mod evaluate;
pub mod options;
pub mod token;

// Re-export the core public API
pub use calc::{calc, calc_with, strip_spaces, validate, Calculator};
pub use convert::infix_to_postfix;
pub use error::CalcError;
pub use evaluate::{apply, evaluate_postfix};
pub use options::CalcOptions;
pub use token::{precedence, Operator, Token};
