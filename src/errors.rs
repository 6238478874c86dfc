use std::fmt;

use crate::value::format_f64;

#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    StrToFloat(String),

    UnknownCharacter(char),
    UnknownFunction(String),

    MismatchedParentheses,

    DividedByZero,
    DomainError(String, f64),

    StackUnderflow,

    EmptyExpression,
    IncompleteExpression,

    ParseFailed(String),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::StrToFloat(s) => write!(f, "Failed to convert '{}' to float", s),

            CalcError::UnknownCharacter(c) => write!(f, "Unknown character '{}'", c),
            CalcError::UnknownFunction(s) => write!(f, "Unknown function '{}'", s),

            CalcError::MismatchedParentheses => write!(f, "Mismatched parentheses"),

            CalcError::DividedByZero => write!(f, "Division by zero"),
            CalcError::DomainError(name, arg) => {
                write!(f, "Function '{}' is not defined for argument {}", name, format_f64(*arg))
            }

            CalcError::StackUnderflow => write!(f, "Evaluation stack exhausted"),

            CalcError::EmptyExpression => write!(f, "Nothing to calculate"),
            CalcError::IncompleteExpression => write!(f, "Too many numbers"),

            CalcError::ParseFailed(s) => write!(f, "Failed to parse expression: {}", s),
        }
    }
}
