//! The closed set of arithmetic operations a session can request.

use std::fmt;
use std::str::FromStr;

/// Arithmetic operation selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in prompt order.
    pub const ALL: [Operation; 4] = [
        Operation::Sum,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Keyword the user types to select this operation.
    pub fn keyword(self) -> &'static str {
        match self {
            Operation::Sum => "sum",
            Operation::Subtract => "sub",
            Operation::Multiply => "mul",
            Operation::Divide => "div",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Raw text that names none of the known operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation {:?}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Exact, case-sensitive keyword match. Surrounding whitespace is not stripped.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.keyword() == raw)
            .ok_or_else(|| UnknownOperation(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_keyword() {
        for op in Operation::ALL {
            let parsed: Operation = op.keyword().parse().expect("parse keyword");
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn rejects_case_and_whitespace_variants() {
        for raw in ["SUM", "Sum", "sum ", " sub", "", "add", "+"] {
            let err = raw.parse::<Operation>().expect_err("should reject");
            assert_eq!(err, UnknownOperation(raw.to_string()));
        }
    }

    #[test]
    fn display_uses_keyword() {
        assert_eq!(Operation::Multiply.to_string(), "mul");
        assert_eq!(Operation::Divide.to_string(), "div");
    }
}
