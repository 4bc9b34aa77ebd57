//! The event vocabulary adapters feed the engine.

use crate::engine::Operator;

/// One user action, regardless of input source (pointer or keyboard).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A digit `0`-`9` or the decimal point.
    Digit(char),
    /// One of the four binary operators.
    Operator(Operator),
    /// Remove the last typed character (Backspace).
    Delete,
    /// Full reset (Escape).
    Clear,
    /// Fold the staged operation (Enter / `=`).
    Compute,
}
