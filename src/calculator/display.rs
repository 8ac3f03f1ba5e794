//! What the display shows for a given state.

use serde::Serialize;

use super::entry::{ERROR_TEXT, parse_or_nan};
use super::format::format_number;
use super::state::CalculatorState;

/// Fraction digits beyond which a stored result is re-formatted.
const MAX_RAW_FRACTION_DIGITS: usize = 6;

/// Magnitude at or above which a stored result is re-formatted.
const LARGE_DISPLAY_VALUE: f64 = 1e10;

/// Decide the display text for `state` on a display `width` characters wide.
///
/// While the user is typing the raw entry is shown verbatim, so partial
/// input like `3.` survives. Otherwise long fractions and large magnitudes
/// go through the number formatter. Anything still wider than the display
/// is re-formatted, or cut to width when it is not a number.
pub fn display_text(state: &CalculatorState, width: usize) -> String {
    let entry = state.entry();
    let raw = entry.as_str();

    let text = if state.is_typing() || entry.is_error() {
        raw.to_string()
    } else {
        let value = entry.value();
        let needs_format = !value.is_nan()
            && (entry.fraction_digits() > MAX_RAW_FRACTION_DIGITS
                || value.abs() >= LARGE_DISPLAY_VALUE);
        if needs_format {
            format_number(value)
        } else {
            raw.to_string()
        }
    };

    fit_to_width(text, width)
}

/// Re-format text wider than `width`, or cut it to width when it is not a
/// number. Entries are always numeric or `Error`, so only text from other
/// sources reaches the cut.
fn fit_to_width(text: String, width: usize) -> String {
    if text.chars().count() <= width || text == ERROR_TEXT {
        return text;
    }

    let value = parse_or_nan(&text);
    if value.is_nan() {
        text.chars().take(width).collect()
    } else {
        format_number(value)
    }
}

/// Serializable view of the calculator for a rendering surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    /// Text for the display.
    pub display: String,
    /// Raw entry text.
    pub entry: String,
    pub pending_operand: Option<f64>,
    /// Symbol of the pending operator, as printed on its button.
    pub pending_operator: Option<char>,
    pub last_result: Option<String>,
    pub awaiting_fresh_entry: bool,
    pub is_error: bool,
}

impl DisplaySnapshot {
    pub fn new(state: &CalculatorState, display: String) -> Self {
        Self {
            display,
            entry: state.current_entry().to_string(),
            pending_operand: state.pending_operand(),
            pending_operator: state.pending_operator().map(|op| op.symbol()),
            last_result: state.last_result().map(str::to_string),
            awaiting_fresh_entry: state.awaiting_fresh_entry(),
            is_error: state.entry().is_error(),
        }
    }
}
