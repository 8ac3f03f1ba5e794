//! Calculator state record.

use super::{Entry, Operator};

/// Left-hand operand and operator waiting for a second operand.
///
/// Kept as one value so that an operand is never pending without its
/// operator, or the other way round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingOperation {
    pub operand: f64,
    pub operator: Operator,
}

/// The conceptual state the machine is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Freshly reset, still showing the placeholder `0`.
    Initial,
    /// The user is typing a number.
    Entering,
    /// An operator or `=` was just pressed; the next digit starts a new entry.
    AwaitingOperand,
    /// The last evaluation failed and the entry shows `Error`.
    Error,
}

/// Everything the engine remembers between inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    pub(crate) entry: Entry,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) awaiting_fresh_entry: bool,
    pub(crate) last_result: Option<String>,
    pub(crate) is_initial: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry: Entry::placeholder(),
            pending: None,
            awaiting_fresh_entry: false,
            last_result: None,
            is_initial: true,
        }
    }
}

impl CalculatorState {
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Raw text of the current entry.
    pub fn current_entry(&self) -> &str {
        self.entry.as_str()
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    pub fn pending_operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn awaiting_fresh_entry(&self) -> bool {
        self.awaiting_fresh_entry
    }

    /// Formatted text of the most recent successful evaluation.
    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    /// True while the user is composing a number whose raw text should be
    /// shown verbatim.
    pub fn is_typing(&self) -> bool {
        !self.awaiting_fresh_entry && !self.is_initial
    }

    pub fn phase(&self) -> Phase {
        if self.entry.is_error() {
            Phase::Error
        } else if self.awaiting_fresh_entry {
            Phase::AwaitingOperand
        } else if self.is_initial {
            Phase::Initial
        } else {
            Phase::Entering
        }
    }
}
