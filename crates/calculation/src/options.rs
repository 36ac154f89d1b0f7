use serde::{Deserialize, Serialize};

/// Options for [`Calculator`](crate::Calculator).
///
/// Deserializes from camelCase JSON; missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalcOptions {
    /// Reject characters other than digits, `+ - * /` and parentheses with
    /// [`CalcError::InvalidCharacter`](crate::CalcError::InvalidCharacter)
    /// before conversion. When off, such characters are pushed as operators
    /// and evaluate to `0`.
    pub reject_unknown_characters: bool,
    /// Fail with [`CalcError::DivisionByZero`](crate::CalcError::DivisionByZero)
    /// instead of yielding `0` for a zero divisor.
    pub division_by_zero_error: bool,
}

impl Default for CalcOptions {
    fn default() -> Self {
        CalcOptions {
            reject_unknown_characters: true,
            division_by_zero_error: false,
        }
    }
}

impl CalcOptions {
    pub fn permissive(mut self) -> Self {
        self.reject_unknown_characters = false;
        self
    }

    pub fn strict_division(mut self) -> Self {
        self.division_by_zero_error = true;
        self
    }
}
