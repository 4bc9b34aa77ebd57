//! The engine state as a tagged union.
//!
//! Modeling the state this way makes the broken combinations (an operator with
//! no left operand, a left operand with no operator) impossible to construct.

use crate::engine::error::CalcError;
use crate::engine::operator::Operator;

/// Everything the calculator remembers between key presses.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcState {
    /// A single operand is being typed or shown; nothing is staged.
    /// `current` is never empty here, it bottoms out at the sentinel `"0"`.
    Entry { current: String },
    /// A left operand and an operator are staged. `current` is the right
    /// operand under entry and may still be empty.
    Pending {
        previous: String,
        op: Operator,
        current: String,
    },
    /// Display-only error mode; the message replaces the operand line until
    /// the next key press.
    Error(CalcError),
}

impl CalcState {
    /// The cleared form every session and every reset starts from.
    pub fn cleared() -> Self {
        Self::Entry {
            current: "0".to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl Default for CalcState {
    fn default() -> Self {
        Self::cleared()
    }
}
