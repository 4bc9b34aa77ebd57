//! Error states the engine can enter.
//!
//! These are display errors, not failures: the engine never panics and never
//! returns a `Result` to the adapter. The message replaces the operand line
//! until the next key press clears it.

use thiserror::Error;

/// A recoverable error shown on the operand line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand buffer did not parse as a number (e.g. a lone ".").
    #[error("Error")]
    InvalidOperand,
    /// An operand was absent where one was required. Unreachable through
    /// [`CalcState`](crate::engine::CalcState), which cannot express such a
    /// combination, but adapters may still match on it.
    #[error("Error")]
    MissingOperand,
    /// The right operand of a division was zero.
    #[error("Can't divide by 0")]
    DivideByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(CalcError::InvalidOperand.to_string(), "Error");
        assert_eq!(CalcError::MissingOperand.to_string(), "Error");
        assert_eq!(CalcError::DivideByZero.to_string(), "Can't divide by 0");
    }
}
