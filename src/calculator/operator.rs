//! The four binary operators and their arithmetic.

use serde::Serialize;

use super::CalcError;

/// A binary operator selectable on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol printed on the button.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse a button symbol. The ASCII forms `*` and `/` are accepted too.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// A zero divisor is reported without dividing. Any non-finite result,
    /// including one caused by a NaN operand, is an error.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivideByZero);
                }
                lhs / rhs
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::NonFiniteResult)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        for op in Operator::ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operator::from_symbol('*'), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol('x'), None);
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Subtract.apply(5.0, 8.0), Ok(-3.0));
        assert_eq!(Operator::Multiply.apply(7.0, 6.0), Ok(42.0));
        assert_eq!(Operator::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operator::Divide.apply(10.0, 0.0),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            Operator::Divide.apply(0.0, -0.0),
            Err(CalcError::DivideByZero)
        );
    }

    #[test]
    fn test_non_finite_results() {
        assert_eq!(
            Operator::Multiply.apply(f64::MAX, 2.0),
            Err(CalcError::NonFiniteResult)
        );
        assert_eq!(
            Operator::Add.apply(f64::NAN, 1.0),
            Err(CalcError::NonFiniteResult)
        );
    }
}
