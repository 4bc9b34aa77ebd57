//! A keypad-driven calculator behind a two-line numeric display.
//!
//! [`engine`] holds the state machine (the interesting part); [`tui`] is a
//! thin terminal adapter over it. The engine is a plain value, so embedders
//! can run as many independent instances as they like and test them without
//! a rendering surface.

pub mod config;
pub mod engine;
pub mod format;
pub mod input;
pub mod tui;

pub use config::Config;
pub use engine::{CalcError, CalcState, Calculator, DisplayLines, Operator};
pub use format::DigitGrouping;
pub use input::InputEvent;
