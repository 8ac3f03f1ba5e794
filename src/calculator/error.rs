//! Error taxonomy for the calculator engine.

use thiserror::Error;

/// Faults that drive the engine into its error state, or that reject a
/// direct entry mutation from a non-UI caller.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CalcError {
    /// The divisor under `÷` was zero.
    #[error("division by zero")]
    DivideByZero,

    /// The operator produced NaN or an infinity.
    #[error("result is not a finite number")]
    NonFiniteResult,

    /// Text offered as an entry is not a numeric literal.
    #[error("malformed entry: {0:?}")]
    MalformedEntry(String),
}
