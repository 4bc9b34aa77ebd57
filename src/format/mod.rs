//! Locale-style digit grouping for the display.
//!
//! Grouping is isolated here so the convention can change without touching
//! the state machine.

mod grouping;

pub use grouping::{DigitGrouping, group_operand};
