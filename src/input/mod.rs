//! Input adapters that translate buttons and keys into calculator actions.
//!
//! Both paths produce the same [`Action`] values, so a digit clicked on the
//! keypad and the same digit typed on the keyboard are indistinguishable to
//! the engine.

mod button;
mod keyboard;

pub use button::Button;
pub use keyboard::{NAMED_KEYS, action_for_key, tokenize};

pub use crate::calculator::Action;
