pub mod calculator;
pub mod config;
pub mod input;
pub mod logging;

pub use calculator::{Action, Calculator, InputOutcome, Operator};
pub use config::CalculatorConfig;
