//! The calculator state machine.
//!
//! Operations are strictly left-to-right and execute immediately: pressing
//! an operator while a second operand has been typed resolves the pending
//! operation first. Every operation reports an [`InputOutcome`] so callers
//! can tell applied input apart from input that a guard ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::display::{DisplaySnapshot, display_text};
use super::format::{MAX_SAFE_INTEGER, format_number};
use super::state::{CalculatorState, PendingOperation};
use super::{CalcError, Entry, Operator};

/// Default cap on the characters a typed entry may hold.
pub const DEFAULT_INPUT_CAP: usize = 12;

/// Default width of the display in characters.
pub const DEFAULT_DISPLAY_WIDTH: usize = 12;

/// Size limits applied to input and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum characters in a typed entry, sign and decimal point included.
    pub input_cap: usize,
    /// Maximum characters shown before the display re-formats or truncates.
    pub display_width: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            input_cap: DEFAULT_INPUT_CAP,
            display_width: DEFAULT_DISPLAY_WIDTH,
        }
    }
}

/// A single logical input, independent of whether it came from a button
/// or a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Evaluate,
    Clear,
    Backspace,
}

/// Why an input was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The entry already has a decimal point.
    DuplicateDecimalPoint,
    /// The entry is at the input cap.
    InputCapReached,
    /// The entry would exceed the safe-integer bound.
    SafeIntegerExceeded,
    /// `=` was pressed with no operation in flight.
    NothingPending,
    /// The input cannot extend the current entry (not a digit, or the
    /// result would not be a numeric literal).
    InvalidInput,
}

/// Result of feeding one input to the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum InputOutcome {
    /// State changed as requested.
    Applied,
    /// A guard ignored the input; state is unchanged.
    Rejected(Rejection),
    /// The engine took the error transition; the entry now shows `Error`.
    Failed(CalcError),
}

impl InputOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// A four-function calculator. Each instance owns its own state.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalculatorState,
    limits: Limits,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            state: CalculatorState::default(),
            limits,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Text the display should show right now.
    pub fn display(&self) -> String {
        display_text(&self.state, self.limits.display_width)
    }

    /// Read-only view of the state for rendering or serialization.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::new(&self.state, self.display())
    }

    /// Dispatch a logical input to the matching operation.
    pub fn apply(&mut self, action: Action) -> InputOutcome {
        let outcome = match action {
            Action::Digit(digit) => self.input_digit(digit),
            Action::Decimal => self.input_decimal(),
            Action::Operator(op) => self.input_operator(op),
            Action::Evaluate => self.evaluate(),
            Action::Clear => self.reset(),
            Action::Backspace => self.backspace(),
        };
        debug!(?action, ?outcome, entry = %self.state.entry, "input handled");
        outcome
    }

    /// Type a digit `0..=9`.
    pub fn input_digit(&mut self, digit: u8) -> InputOutcome {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return InputOutcome::Rejected(Rejection::InvalidInput);
        };

        let candidate = if self.state.awaiting_fresh_entry || self.state.is_initial {
            Entry::from_formatted(c.to_string())
        } else {
            if self.input_cap_reached() {
                return InputOutcome::Rejected(Rejection::InputCapReached);
            }
            match self.state.entry.appended(c) {
                Some(entry) => entry,
                None => return InputOutcome::Rejected(Rejection::InvalidInput),
            }
        };

        if exceeds_safe_integer(&candidate) {
            return InputOutcome::Rejected(Rejection::SafeIntegerExceeded);
        }

        self.state.entry = candidate;
        self.state.awaiting_fresh_entry = false;
        self.state.is_initial = false;
        InputOutcome::Applied
    }

    /// Type the decimal point.
    ///
    /// Only a digit ends the Initial state, so a digit typed after `.` on
    /// the placeholder still replaces the whole entry.
    pub fn input_decimal(&mut self) -> InputOutcome {
        if self.has_decimal_point() {
            return InputOutcome::Rejected(Rejection::DuplicateDecimalPoint);
        }

        if self.state.awaiting_fresh_entry {
            self.state.entry = Entry::from_formatted("0.".to_string());
            self.state.awaiting_fresh_entry = false;
        } else {
            if self.input_cap_reached() {
                return InputOutcome::Rejected(Rejection::InputCapReached);
            }
            match self.state.entry.appended('.') {
                Some(entry) => self.state.entry = entry,
                None => return InputOutcome::Rejected(Rejection::InvalidInput),
            }
        }

        InputOutcome::Applied
    }

    /// Select an operator.
    ///
    /// If an operation is pending and a second operand was typed, it is
    /// resolved first. Pressing operators back to back only replaces the
    /// pending operator.
    pub fn input_operator(&mut self, operator: Operator) -> InputOutcome {
        let mut outcome = InputOutcome::Applied;
        if self.state.pending.is_some() && !self.state.awaiting_fresh_entry {
            if let failed @ InputOutcome::Failed(_) = self.evaluate() {
                outcome = failed;
            }
        }

        self.state.pending = Some(PendingOperation {
            operand: self.state.entry.value(),
            operator,
        });
        self.state.awaiting_fresh_entry = true;
        self.state.is_initial = false;
        outcome
    }

    /// Resolve the pending operation using the current entry as the second
    /// operand.
    ///
    /// Pressing `=` right after an operator reuses the still-displayed
    /// first operand, so `5 + =` gives `10`.
    pub fn evaluate(&mut self) -> InputOutcome {
        let Some(pending) = self.state.pending else {
            return InputOutcome::Rejected(Rejection::NothingPending);
        };

        let rhs = self.state.entry.value();
        match pending.operator.apply(pending.operand, rhs) {
            Ok(value) => {
                let formatted = format_number(value);
                self.state.entry = Entry::from_formatted(formatted.clone());
                self.state.last_result = Some(formatted);
                self.state.pending = None;
                self.state.awaiting_fresh_entry = true;
                self.state.is_initial = false;
                InputOutcome::Applied
            }
            Err(err) => {
                warn!(
                    operand = pending.operand,
                    operator = %pending.operator.symbol(),
                    rhs,
                    error = %err,
                    "evaluation failed"
                );
                self.enter_error_state();
                InputOutcome::Failed(err)
            }
        }
    }

    /// Return to the freshly-reset state.
    pub fn reset(&mut self) -> InputOutcome {
        self.state = CalculatorState::default();
        InputOutcome::Applied
    }

    /// Drop the last character of the entry. Never touches the pending
    /// operation.
    pub fn backspace(&mut self) -> InputOutcome {
        let truncated = if self.state.entry.len() > 1 {
            self.state.entry.truncated()
        } else {
            None
        };

        match truncated {
            Some(entry) => self.state.entry = entry,
            None => {
                self.state.entry = Entry::placeholder();
                self.state.is_initial = true;
            }
        }
        InputOutcome::Applied
    }

    /// Replace the entry with caller-supplied text, as if it had been typed.
    ///
    /// The text must be a numeric literal or the error sentinel; anything
    /// else is rejected and leaves the state untouched.
    pub fn set_entry(&mut self, text: &str) -> Result<(), CalcError> {
        let entry = Entry::parse_literal(text)?;
        if entry.is_error() {
            self.enter_error_state();
        } else {
            self.state.entry = entry;
            self.state.awaiting_fresh_entry = false;
            self.state.is_initial = false;
        }
        Ok(())
    }

    /// Whether the entry already has a decimal point.
    pub fn has_decimal_point(&self) -> bool {
        self.state.entry.has_decimal_point()
    }

    /// Whether the entry is at the input cap.
    pub fn input_cap_reached(&self) -> bool {
        self.state.entry.len() >= self.limits.input_cap
    }

    fn enter_error_state(&mut self) {
        self.state.entry = Entry::error();
        self.state.pending = None;
        self.state.awaiting_fresh_entry = true;
        self.state.last_result = None;
    }
}

/// Whether the entry's magnitude is beyond the safe-integer bound.
fn exceeds_safe_integer(entry: &Entry) -> bool {
    let value = entry.value();
    !value.is_nan() && value.abs() > MAX_SAFE_INTEGER
}
