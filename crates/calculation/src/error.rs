use std::num::ParseFloatError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A `)` without a matching `(`, or a `(` still open at the end of input.
    #[error("Unbalanced parentheses.")]
    UnbalancedParentheses,

    /// An operator was reached with fewer than two values on the operand stack.
    #[error("Insufficient operands for operation.")]
    InsufficientOperands,

    /// Evaluation did not finish with exactly one value.
    #[error("Malformed expression: wrong number of operands.")]
    MalformedExpression,

    #[error("Numeric parse error: {0}")]
    NumericParseError(#[from] ParseFloatError),

    #[error("Invalid character {character:?} at position {position}.")]
    InvalidCharacter { character: char, position: usize },

    #[error("DIVISION_BY_ZERO")]
    DivisionByZero,
}
