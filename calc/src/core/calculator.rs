//! Pure arithmetic over the closed operation set.

use crate::core::number::format_number;
use crate::core::operation::Operation;

/// Diagnostic line for a division whose divisor is zero.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero is not allowed.";
/// Diagnostic line for an operation outside the known set.
pub const INVALID_OPERATION: &str = "Invalid operation, terminating...";
/// Marker printed in place of a value when division by zero was requested.
pub const UNDEFINED_MARKER: &str = "undefined";

/// Result of one calculation.
///
/// Division by zero and an unknown operation are reported outcomes, not
/// errors: a run that reaches either still completes normally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    DivisionByZero,
    InvalidOperation,
}

impl Outcome {
    /// Diagnostic line this outcome carries, if any.
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Outcome::Value(_) => None,
            Outcome::DivisionByZero => Some(DIVISION_BY_ZERO),
            Outcome::InvalidOperation => Some(INVALID_OPERATION),
        }
    }

    /// Text interpolated into the result line.
    ///
    /// `None` for [`Outcome::InvalidOperation`], which has no result line.
    pub fn display_value(&self) -> Option<String> {
        match self {
            Outcome::Value(value) => Some(format_number(*value)),
            Outcome::DivisionByZero => Some(UNDEFINED_MARKER.to_string()),
            Outcome::InvalidOperation => None,
        }
    }
}

/// Apply `operation` to the two operands.
pub fn calculate(operation: Operation, lhs: f64, rhs: f64) -> Outcome {
    match operation {
        Operation::Sum => Outcome::Value(lhs + rhs),
        Operation::Subtract => Outcome::Value(lhs - rhs),
        Operation::Multiply => Outcome::Value(lhs * rhs),
        // `-0.0 == 0.0`, so both zeros are rejected.
        Operation::Divide if rhs == 0.0 => Outcome::DivisionByZero,
        Operation::Divide => Outcome::Value(lhs / rhs),
    }
}

/// Calculate from a raw operation keyword.
///
/// Keywords outside the known set produce [`Outcome::InvalidOperation`].
pub fn calculate_keyword(keyword: &str, lhs: f64, rhs: f64) -> Outcome {
    match keyword.parse::<Operation>() {
        Ok(operation) => calculate(operation, lhs, rhs),
        Err(_) => Outcome::InvalidOperation,
    }
}
