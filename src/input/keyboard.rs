//! Keyboard key mapping.
//!
//! Keys are identified by name: a printable key by its character, other
//! keys by names such as `Enter` or `Backspace`.

use crate::calculator::{Action, Operator};

/// Non-printable keys the calculator responds to.
pub const NAMED_KEYS: &[&str] = &["Enter", "Escape", "Backspace"];

/// Map a key to the action it triggers.
///
/// Returns `None` for keys the calculator ignores; those should be left
/// to the host's default handling.
pub fn action_for_key(key: &str) -> Option<Action> {
    match key {
        "Enter" | "=" => return Some(Action::Evaluate),
        "Escape" | "c" | "C" => return Some(Action::Clear),
        "Backspace" => return Some(Action::Backspace),
        "." | "," => return Some(Action::Decimal),
        _ => {}
    }

    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };

    match c {
        '0'..='9' => c.to_digit(10).map(|d| Action::Digit(d as u8)),
        '+' | '-' | '*' | '/' => Operator::from_symbol(c).map(Action::Operator),
        _ => None,
    }
}

/// Split a line of typed text into key names.
///
/// Whitespace separates tokens. Named keys stay whole; any other token is
/// split into one key per character, so `"12+3="` yields five keys.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if NAMED_KEYS.contains(&token) {
            keys.push(token.to_string());
        } else {
            keys.extend(token.chars().map(String::from));
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        for d in 0..=9u8 {
            assert_eq!(action_for_key(&d.to_string()), Some(Action::Digit(d)));
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(action_for_key("+"), Some(Action::Operator(Operator::Add)));
        assert_eq!(
            action_for_key("-"),
            Some(Action::Operator(Operator::Subtract))
        );
        assert_eq!(
            action_for_key("*"),
            Some(Action::Operator(Operator::Multiply))
        );
        assert_eq!(
            action_for_key("/"),
            Some(Action::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key("Enter"), Some(Action::Evaluate));
        assert_eq!(action_for_key("="), Some(Action::Evaluate));
        assert_eq!(action_for_key("Escape"), Some(Action::Clear));
        assert_eq!(action_for_key("c"), Some(Action::Clear));
        assert_eq!(action_for_key("C"), Some(Action::Clear));
        assert_eq!(action_for_key("Backspace"), Some(Action::Backspace));
        assert_eq!(action_for_key("."), Some(Action::Decimal));
        assert_eq!(action_for_key(","), Some(Action::Decimal));
    }

    #[test]
    fn test_ignored_keys() {
        for key in ["a", "x", "×", "÷", "Shift", "Tab", "F1", "", " ", "12"] {
            assert_eq!(action_for_key(key), None, "{key:?} should be ignored");
        }
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("12+3="), vec!["1", "2", "+", "3", "="]);
        assert_eq!(
            tokenize("7 * 6 Enter Escape"),
            vec!["7", "*", "6", "Enter", "Escape"]
        );
        assert_eq!(tokenize("45 Backspace"), vec!["4", "5", "Backspace"]);
        assert!(tokenize("   ").is_empty());
    }
}
