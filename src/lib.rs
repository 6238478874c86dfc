//! # Scientific expression calculator
//!
//! The calculator evaluates a single line of infix text and returns either
//! a float number or a descriptive failure. Numbers are 64-bit floats;
//! literals support an optional fraction and scientific notation (`1e-2`,
//! `.5`, `2.5e3`).
//!
//! Trigonometric functions work in degrees on both sides of the call:
//! `sin(90)` returns `1`, `asin(1)` returns `90`.
//!
//! The list of supported functions:
//! * trigonometric functions: sin, cos, tan
//! * inverted trigonometric functions: asin, acos, atan
//! * natural logarithm and exponent: log, exp
//!
//! Operators (starting from highest priority):
//! * `^` - power
//! * `*`, `/` - multiplication and division
//! * `+`, `-` - addition and subtraction
//!
//! All operators, power included, group left to right: `2^3^2` is
//! `(2^3)^2` and evaluates to `64`. A `-` placed where no operand can
//! precede it negates the number that follows: `-3+5`, `3*-2`, `(-3)`.
//!
//! Division by zero, logarithm of a non-positive number, and inverse
//! sine/cosine outside `[-1, 1]` are reported as errors instead of
//! producing infinities or NaN.
//!
//! Two standalone helper modules accompany the evaluator: polynomial
//! addition over sorted term lists and integer matrix arithmetic.

#[macro_use]
extern crate pest_derive;

pub mod errors;
pub mod matrix;
pub mod parse;
pub mod poly;
pub mod stack;
pub mod value;
