//! Keypad buttons.

use crate::calculator::{Action, Operator};

/// A button on the calculator keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Digit(u8),
    Decimal,
    Operator(Operator),
    Clear,
    Equals,
}

impl Button {
    /// Every button on the keypad, in layout order.
    pub fn keypad() -> Vec<Button> {
        let mut buttons = vec![
            Button::Clear,
            Button::Operator(Operator::Divide),
            Button::Operator(Operator::Multiply),
            Button::Operator(Operator::Subtract),
        ];
        buttons.extend([7, 8, 9].map(Button::Digit));
        buttons.push(Button::Operator(Operator::Add));
        buttons.extend([4, 5, 6, 1, 2, 3].map(Button::Digit));
        buttons.push(Button::Equals);
        buttons.push(Button::Digit(0));
        buttons.push(Button::Decimal);
        buttons
    }

    /// Look up a button by the label printed on it.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match c {
            '0'..='9' => c.to_digit(10).map(|d| Button::Digit(d as u8)),
            '.' => Some(Button::Decimal),
            'C' => Some(Button::Clear),
            '=' => Some(Button::Equals),
            '+' | '-' | '×' | '÷' => Operator::from_symbol(c).map(Button::Operator),
            _ => None,
        }
    }

    /// The label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Decimal => ".".to_string(),
            Button::Operator(op) => op.symbol().to_string(),
            Button::Clear => "C".to_string(),
            Button::Equals => "=".to_string(),
        }
    }

    /// The action a click on this button performs.
    pub fn action(&self) -> Action {
        match *self {
            Button::Digit(d) => Action::Digit(d),
            Button::Decimal => Action::Decimal,
            Button::Operator(op) => Action::Operator(op),
            Button::Clear => Action::Clear,
            Button::Equals => Action::Evaluate,
        }
    }
}
