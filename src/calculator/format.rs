//! Number formatting for computed results.

use super::entry::ERROR_TEXT;

/// Largest integer magnitude an `f64` represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Magnitudes at or above this are shown in scientific notation.
const LARGE_THRESHOLD: f64 = 1e15;

/// Non-zero magnitudes below this are shown in scientific notation.
const SMALL_THRESHOLD: f64 = 1e-6;

/// Longest plain rendering accepted before falling back to scientific form.
const MAX_FORMATTED_LEN: usize = 20;

/// Fractional digits kept when rounding away binary noise.
const ROUNDING_SCALE: f64 = 1e10;

/// Mantissa digits in scientific notation.
const SCIENTIFIC_DIGITS: usize = 6;

/// Format a computed value for the entry.
///
/// Non-finite values become `"Error"`. Values outside `[1e-6, 1e15)` are
/// written as `d.dddddde±x`; everything else is rounded to ten decimal
/// places and written in its shortest decimal form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude > MAX_SAFE_INTEGER || magnitude >= LARGE_THRESHOLD || magnitude < SMALL_THRESHOLD
    {
        return format_scientific(value);
    }

    let rounded = round_half_up(value * ROUNDING_SCALE) / ROUNDING_SCALE;
    let formatted = format!("{}", rounded);

    if formatted.len() > MAX_FORMATTED_LEN {
        format_scientific(value)
    } else {
        formatted
    }
}

/// Format in scientific notation with six mantissa digits and a signed
/// exponent, e.g. `1.234568e+20` or `-5.000000e-7`.
pub fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.*e}", SCIENTIFIC_DIGITS, value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Round to the nearest integer, halves toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
