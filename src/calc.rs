//! Arithmetic behind the equation line.
//!
//! Results are `f32`. Nothing is guarded: `x / 0` is `inf` (or `NaN`
//! for `0 / 0`) and is shown as such.

use crate::state::Operator;
use num_traits::float::FloatCore;

/// Evaluate `a <op> b`.
pub fn compute(a: u8, op: Operator, b: u8) -> f32 {
    let (a, b) = (i32::from(a), i32::from(b));
    match op {
        Operator::Add => (a + b) as f32,
        Operator::Subtract => (a - b) as f32,
        Operator::Multiply => (a * b) as f32,
        Operator::Divide => a as f32 / b as f32,
        Operator::Power => FloatCore::powi(a as f32, b),
    }
}

/// Evaluate `a <symbol> b`, where `symbol` is one of `+ - * / ^`.
/// Unknown symbols evaluate to 0.0.
pub fn compute_symbol(a: u8, symbol: char, b: u8) -> f32 {
    match Operator::from_symbol(symbol) {
        Some(op) => compute(a, op, b),
        None => 0.0,
    }
}
