//! The calculator state machine.
//!
//! All transition rules live here. Every mutating operation returns
//! immediately and leaves the state renderable; adapters pull the display
//! lines afterwards via [`Calculator::display`].

use tracing::{debug, trace};

use crate::engine::error::CalcError;
use crate::engine::operator::Operator;
use crate::engine::state::CalcState;
use crate::format::{DigitGrouping, group_operand};
use crate::input::InputEvent;

/// The two display regions, rendered after every action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayLines {
    /// The operand being typed, the last result, or an error message.
    pub current: String,
    /// The staged operand and operator symbol, or empty when nothing is staged.
    pub previous: String,
}

/// A keypad calculator: digit entry, one staged operation, left-to-right
/// folding.
///
/// The engine assumes single-caller, non-reentrant use; it holds no locks and
/// never blocks.
#[derive(Clone, Debug)]
pub struct Calculator {
    state: CalcState,
    grouping: DigitGrouping,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_grouping(DigitGrouping::default())
    }

    /// Create a cleared calculator that formats with the given grouping
    /// convention.
    pub fn with_grouping(grouping: DigitGrouping) -> Self {
        Self {
            state: CalcState::cleared(),
            grouping,
        }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Reset to the cleared state. Always succeeds.
    pub fn clear(&mut self) {
        trace!("clear");
        self.state = CalcState::cleared();
    }

    /// The shared error-exit transition: entry-like keys pressed while an
    /// error is shown start over from a cleared state.
    fn clear_if_error(&mut self) {
        if self.state.is_error() {
            self.clear();
        }
    }

    /// Append a digit or the decimal point to the operand being typed.
    /// Any other token is ignored.
    pub fn append(&mut self, token: char) {
        if !token.is_ascii_digit() && token != '.' {
            trace!(%token, "ignoring non-numeric token");
            return;
        }
        self.clear_if_error();
        let (CalcState::Entry { current } | CalcState::Pending { current, .. }) =
            &mut self.state
        else {
            return;
        };
        if token == '.' && current.contains('.') {
            return;
        }
        if token != '.' && current.as_str() == "0" {
            // replacing the sentinel avoids leading zeros like "05"
            current.clear();
        }
        current.push(token);
    }

    /// Stage an operator. If an operation is already staged and a right
    /// operand has been typed, fold it first.
    pub fn choose_operator(&mut self, op: Operator) {
        match &mut self.state {
            CalcState::Error(_) => {
                // Recovery keeps the cleared "0" as the staged left operand.
                self.state = CalcState::Pending {
                    previous: "0".to_string(),
                    op,
                    current: String::new(),
                };
            }
            CalcState::Pending {
                op: staged,
                current,
                ..
            } if current.is_empty() => {
                // No digit typed since the last operator: the user is
                // correcting a misclick. Swap the operator, fold nothing.
                trace!(from = staged.symbol(), to = op.symbol(), "operator corrected");
                *staged = op;
            }
            CalcState::Pending { .. } => {
                self.compute();
                // A failed fold shows its error instead of staging `op`.
                if let CalcState::Entry { current } = &mut self.state {
                    let previous = std::mem::take(current);
                    self.state = CalcState::Pending {
                        previous,
                        op,
                        current: String::new(),
                    };
                }
            }
            CalcState::Entry { current } => {
                let previous = std::mem::take(current);
                self.state = CalcState::Pending {
                    previous,
                    op,
                    current: String::new(),
                };
            }
        }
    }

    /// Remove the last typed character. Deleting while an error is shown
    /// resets the whole state, like [`Calculator::clear`].
    pub fn delete(&mut self) {
        if self.state.is_error() {
            self.clear();
            return;
        }
        let (CalcState::Entry { current } | CalcState::Pending { current, .. }) =
            &mut self.state
        else {
            return;
        };
        if current.as_str() == "0" {
            return;
        }
        current.pop();
        if current.is_empty() {
            current.push('0');
        }
    }

    /// Fold the staged operation into a single operand.
    ///
    /// With nothing staged this is a no-op, so repeated `=` presses leave the
    /// result untouched. With an operator staged but no right operand typed,
    /// the staged operator is cancelled and the left operand restored.
    pub fn compute(&mut self) {
        let (previous, op, current) = match &self.state {
            CalcState::Pending {
                previous,
                op,
                current,
            } => (previous.clone(), *op, current.clone()),
            CalcState::Entry { .. } | CalcState::Error(_) => return,
        };

        if current.is_empty() {
            trace!(%previous, "pending operator cancelled");
            self.state = CalcState::Entry { current: previous };
            return;
        }

        let folded = parse_operand(&previous)
            .and_then(|lhs| parse_operand(&current).map(|rhs| (lhs, rhs)))
            .and_then(|(lhs, rhs)| op.apply(lhs, rhs));

        self.state = match folded {
            Ok(value) => {
                let rounded = round_result(value);
                debug!(%previous, op = op.symbol(), %current, result = rounded, "folded");
                CalcState::Entry {
                    current: rounded.to_string(),
                }
            }
            Err(err) => {
                debug!(%err, "fold failed");
                CalcState::Error(err)
            }
        };
    }

    /// Dispatch one adapter-level input event.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(token) => self.append(token),
            InputEvent::Operator(op) => self.choose_operator(op),
            InputEvent::Delete => self.delete(),
            InputEvent::Clear => self.clear(),
            InputEvent::Compute => self.compute(),
        }
    }

    /// Format one operand buffer the way the display shows it. Error messages
    /// pass through untouched.
    pub fn format_for_display(&self, text: &str) -> String {
        if self.state.is_error() {
            return text.to_string();
        }
        group_operand(text, self.grouping)
    }

    /// Render both display lines. Pure; call after every mutation.
    pub fn display(&self) -> DisplayLines {
        match &self.state {
            CalcState::Error(err) => DisplayLines {
                current: err.to_string(),
                previous: String::new(),
            },
            CalcState::Entry { current } => DisplayLines {
                current: group_operand(current, self.grouping),
                previous: String::new(),
            },
            CalcState::Pending {
                previous,
                op,
                current,
            } => DisplayLines {
                current: group_operand(current, self.grouping),
                previous: format!("{} {}", group_operand(previous, self.grouping), op.symbol()),
            },
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.parse::<f64>().map_err(|_| CalcError::InvalidOperand)
}

/// Round to 13 fractional digits to hide binary float artifacts
/// (0.1 + 0.2 should read "0.3").
fn round_result(value: f64) -> f64 {
    (value * 1e13).round() / 1e13
}
