//! Binary operators and their arithmetic.

use crate::engine::error::CalcError;

/// One of the four binary operations a keypad offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown on the staged-operation display line.
    ///
    /// Division always renders as `÷`, even when it was typed as `/`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Map a keyboard character to an operator.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operation. Division by zero is rejected up front rather than
    /// producing an infinity.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalcError::DivideByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}
