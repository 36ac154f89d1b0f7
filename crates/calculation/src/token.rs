//! Single-character token classification and the operator precedence table.
//!
//! Every operand is exactly one digit character. Multi-digit numbers are never
//! assembled: `"23"` is the two operands `2` and `3`.

/// A binary operator. `Unrecognized` holds any other character that the
/// permissive conversion branch treats as an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Unrecognized(char),
}

impl Operator {
    pub fn from_symbol(c: char) -> Operator {
        match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            other => Operator::Unrecognized(other),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Unrecognized(c) => c,
        }
    }
}

/// A classified input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Digit(char),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classifies a character. Anything that is not a digit or a parenthesis
    /// falls through to [`Token::Operator`].
    pub fn classify(c: char) -> Token {
        match c {
            '0'..='9' => Token::Digit(c),
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            other => Token::Operator(Operator::from_symbol(other)),
        }
    }

    /// Returns `true` for digits, the four arithmetic operators and parentheses.
    pub fn is_known(self) -> bool {
        !matches!(self, Token::Operator(Operator::Unrecognized(_)))
    }

    pub fn symbol(self) -> char {
        match self {
            Token::Digit(c) => c,
            Token::Operator(op) => op.symbol(),
            Token::LeftParen => '(',
            Token::RightParen => ')',
        }
    }
}

/// Operator precedence. Parentheses rank 0, unknown characters rank -1 and so
/// never cause anything but themselves to be pushed.
pub fn precedence(c: char) -> i8 {
    match c {
        '(' | ')' => 0,
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => -1,
    }
}
