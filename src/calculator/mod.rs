//! Calculator engine for a four-function keypad calculator.
//!
//! This module provides:
//! - A validated entry type for the number being typed
//! - The state machine behind digit, decimal, operator and equals input
//! - Number formatting and the display presentation rule

mod display;
mod engine;
mod entry;
mod error;
mod format;
mod operator;
mod state;

pub use display::{DisplaySnapshot, display_text};
pub use engine::{
    Action, Calculator, DEFAULT_DISPLAY_WIDTH, DEFAULT_INPUT_CAP, InputOutcome, Limits, Rejection,
};
pub use entry::{ERROR_TEXT, Entry, parse_or_nan};
pub use error::CalcError;
pub use format::{MAX_SAFE_INTEGER, format_number, format_scientific};
pub use operator::Operator;
pub use state::{CalculatorState, PendingOperation, Phase};
