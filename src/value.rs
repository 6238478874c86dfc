use std::str;

use lazy_static::lazy_static;

use crate::errors::*;

/// Expression calculation result: either the final value or an error
pub type CalcResult = Result<f64, CalcError>;
pub(crate) type CalcErrorResult = Result<(), CalcError>;

/// Binary operators recognized by the evaluator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Single-argument functions recognized by the evaluator.
///
/// Trigonometric functions take their argument in degrees, inverse
/// trigonometric functions return degrees. `Log` is the natural logarithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FuncKind {
    Sin,
    Cos,
    Tan,
    Log,
    Exp,
    Asin,
    Acos,
    Atan,
}

// functions bind tighter than any binary operator
pub(crate) const FUNC_PRIORITY: i32 = 4;

lazy_static! {
    pub(crate) static ref STD_FUNCS: Vec<(&'static str, FuncKind)> = vec![
        ("sin", FuncKind::Sin),
        ("cos", FuncKind::Cos),
        ("tan", FuncKind::Tan),
        ("log", FuncKind::Log),
        ("exp", FuncKind::Exp),
        ("asin", FuncKind::Asin),
        ("acos", FuncKind::Acos),
        ("atan", FuncKind::Atan),
    ];
}

impl OpKind {
    // operator priority: the higher the value the sooner the operator is applied
    pub(crate) fn priority(self) -> i32 {
        match self {
            OpKind::Add | OpKind::Sub => 1,
            OpKind::Mul | OpKind::Div => 2,
            OpKind::Pow => 3,
        }
    }

    /// Applies the operator to its two operands
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult {
        match self {
            OpKind::Add => Ok(lhs + rhs),
            OpKind::Sub => Ok(lhs - rhs),
            OpKind::Mul => Ok(lhs * rhs),
            OpKind::Div => {
                if rhs == 0.0 {
                    Err(CalcError::DividedByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
            OpKind::Pow => Ok(lhs.powf(rhs)),
        }
    }
}

impl FuncKind {
    /// Looks a function up by its name. Names are case-sensitive
    pub fn from_name(name: &str) -> Option<FuncKind> {
        for (fname, kind) in STD_FUNCS.iter() {
            if *fname == name {
                return Some(*kind);
            }
        }
        None
    }

    pub fn name(self) -> &'static str {
        match self {
            FuncKind::Sin => "sin",
            FuncKind::Cos => "cos",
            FuncKind::Tan => "tan",
            FuncKind::Log => "log",
            FuncKind::Exp => "exp",
            FuncKind::Asin => "asin",
            FuncKind::Acos => "acos",
            FuncKind::Atan => "atan",
        }
    }

    /// Applies the function to its single argument
    pub fn apply(self, arg: f64) -> CalcResult {
        match self {
            FuncKind::Sin => Ok(arg.to_radians().sin()),
            FuncKind::Cos => Ok(arg.to_radians().cos()),
            FuncKind::Tan => Ok(arg.to_radians().tan()),
            FuncKind::Log => {
                if arg <= 0.0 {
                    Err(self.domain_error(arg))
                } else {
                    Ok(arg.ln())
                }
            }
            FuncKind::Exp => Ok(arg.exp()),
            FuncKind::Asin => {
                if arg < -1.0 || arg > 1.0 {
                    Err(self.domain_error(arg))
                } else {
                    Ok(arg.asin().to_degrees())
                }
            }
            FuncKind::Acos => {
                if arg < -1.0 || arg > 1.0 {
                    Err(self.domain_error(arg))
                } else {
                    Ok(arg.acos().to_degrees())
                }
            }
            FuncKind::Atan => Ok(arg.atan().to_degrees()),
        }
    }

    fn domain_error(self, arg: f64) -> CalcError {
        CalcError::DomainError(self.name().to_string(), arg)
    }
}

const F64_BUF_LEN: usize = 48;

/// Renders a calculation result in the shortest form that round-trips
pub fn format_f64(g: f64) -> String {
    let mut buf = [b'\0'; F64_BUF_LEN];
    match dtoa::write(&mut buf[..], g) {
        Ok(len) => match str::from_utf8(&buf[..len]) {
            Ok(s) => s.to_string(),
            Err(..) => format!("{}", g),
        },
        Err(..) => format!("{}", g),
    }
}
