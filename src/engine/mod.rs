//! Calculator engine: the input-and-evaluation state machine.
//!
//! This module provides functionality to:
//! - Track the operand being typed and a staged operation
//! - Fold staged operations left to right (no precedence)
//! - Recover from error states on the next key press
//! - Produce the two display lines after every action

mod error;
mod machine;
mod operator;
mod state;

pub use error::CalcError;
pub use machine::{Calculator, DisplayLines};
pub use operator::Operator;
pub use state::CalcState;
