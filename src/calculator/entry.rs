//! The entry currently shown on the calculator.
//!
//! An entry is the raw text the user is composing, or the text produced by
//! the last evaluation. It is always a (possibly partial) numeric literal
//! such as `"12"`, `"3."` or `"1.500000e+20"`, or the `"Error"` sentinel.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use super::CalcError;

/// Text shown after a failed evaluation.
pub const ERROR_TEXT: &str = "Error";

lazy_static! {
    /// Matches a partial numeric literal: optional sign, digits with at most
    /// one decimal point (trailing point allowed), optional exponent.
    static ref NUMERIC_LITERAL: Regex = Regex::new(
        r"^-?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// A validated entry string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry(String);

impl Entry {
    /// The `"0"` placeholder shown after a reset.
    pub fn placeholder() -> Self {
        Self("0".to_string())
    }

    /// The error sentinel.
    pub fn error() -> Self {
        Self(ERROR_TEXT.to_string())
    }

    /// Validate `text` as an entry.
    pub fn parse_literal(text: &str) -> Result<Self, CalcError> {
        if text == ERROR_TEXT || NUMERIC_LITERAL.is_match(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(CalcError::MalformedEntry(text.to_string()))
        }
    }

    /// Build an entry from the output of the number formatter.
    pub(crate) fn from_formatted(text: String) -> Self {
        debug_assert!(text == ERROR_TEXT || NUMERIC_LITERAL.is_match(&text));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the entry. Anything that does not parse, including
    /// the error sentinel, is NaN.
    pub fn value(&self) -> f64 {
        parse_or_nan(&self.0)
    }

    pub fn is_error(&self) -> bool {
        self.0 == ERROR_TEXT
    }

    /// Length in characters, counting sign and decimal point.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// Number of characters after the decimal point, if there is one.
    pub fn fraction_digits(&self) -> usize {
        self.0
            .split_once('.')
            .map(|(_, fraction)| fraction.chars().count())
            .unwrap_or(0)
    }

    /// The entry with `c` appended, if the result is still a valid literal.
    pub(crate) fn appended(&self, c: char) -> Option<Self> {
        let mut text = self.0.clone();
        text.push(c);
        NUMERIC_LITERAL.is_match(&text).then_some(Self(text))
    }

    /// The entry with its last character removed, if the remainder is
    /// still a non-empty literal. The error sentinel never truncates.
    pub(crate) fn truncated(&self) -> Option<Self> {
        if self.is_error() {
            return None;
        }
        let mut text = self.0.clone();
        text.pop();
        NUMERIC_LITERAL.is_match(&text).then_some(Self(text))
    }
}

impl Default for Entry {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse text as a decimal number, yielding NaN when it is not one.
pub fn parse_or_nan(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_partial_literals() {
        for text in ["0", "12", "3.", "0.5", ".5", "-5", "1.500000e+20", "2.5e-7", "Error"] {
            assert!(Entry::parse_literal(text).is_ok(), "{text} should be accepted");
        }
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["", "-", ".", "1.2.3", "abc", "1e", "12a", " 1", "error"] {
            assert_eq!(
                Entry::parse_literal(text),
                Err(CalcError::MalformedEntry(text.to_string())),
            );
        }
    }

    #[test]
    fn test_value() {
        assert_eq!(Entry::placeholder().value(), 0.0);
        assert_eq!(Entry::parse_literal("3.").unwrap().value(), 3.0);
        assert_eq!(Entry::parse_literal("-2.5").unwrap().value(), -2.5);
        assert_eq!(Entry::parse_literal("1.5e+3").unwrap().value(), 1500.0);
        assert!(Entry::error().value().is_nan());
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(Entry::parse_literal("12").unwrap().fraction_digits(), 0);
        assert_eq!(Entry::parse_literal("12.").unwrap().fraction_digits(), 0);
        assert_eq!(Entry::parse_literal("1.2345678").unwrap().fraction_digits(), 7);
    }

    #[test]
    fn test_appended_keeps_single_point() {
        let entry = Entry::parse_literal("1.2").unwrap();
        assert_eq!(entry.appended('3').unwrap().as_str(), "1.23");
        assert!(entry.appended('.').is_none());
    }

    #[test]
    fn test_truncated() {
        let entry = Entry::parse_literal("123").unwrap();
        assert_eq!(entry.truncated().unwrap().as_str(), "12");
        assert!(Entry::parse_literal("7").unwrap().truncated().is_none());
        assert!(Entry::parse_literal("-5").unwrap().truncated().is_none());
        assert!(Entry::error().truncated().is_none());
    }

    #[test]
    fn test_parse_or_nan() {
        assert_eq!(parse_or_nan("42"), 42.0);
        assert!(parse_or_nan("Error").is_nan());
        assert!(parse_or_nan("").is_nan());
    }
}
