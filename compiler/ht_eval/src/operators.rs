//! Binary operator implementations for the expression engine.
//!
//! Dispatch is a direct match on the operand pair. The operator set is fixed,
//! so every combination the language accepts is listed here and anything else
//! is a type mismatch.

use ht_ir::BinaryOp;

use crate::errors::{binary_type_mismatch, division_by_zero, integer_overflow, EvalResult};
use crate::value::EvalValue;

/// Checked arithmetic where overflow is the only failure.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result
        .map(EvalValue::Number)
        .ok_or_else(|| integer_overflow(op_name))
}

/// Checked division with zero guard.
///
/// `i64::MIN / -1` is the one overflowing quotient.
#[inline]
fn checked_div(a: i64, b: i64) -> EvalResult {
    if b == 0 {
        Err(division_by_zero())
    } else {
        checked_arith(a.checked_div(b), "division")
    }
}

/// Evaluate `left op right`.
///
/// Operands passed by name are looked through, so `x + 1` behaves the same
/// whether `x` arrives as a plain or identifier-wrapped value.
pub fn evaluate_binary(left: &EvalValue, right: &EvalValue, op: BinaryOp) -> EvalResult {
    match (left.resolved(), right.resolved()) {
        (EvalValue::Number(a), EvalValue::Number(b)) => eval_number_binary(*a, *b, op),
        (EvalValue::String(a), EvalValue::String(b)) => eval_string_binary(a, b, op)
            .ok_or_else(|| binary_type_mismatch(op, left.resolved(), right.resolved())),
        (l, r) => Err(binary_type_mismatch(op, l, r)),
    }
}

fn eval_number_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(a, b),
        BinaryOp::Greater => Ok(EvalValue::Boolean(a > b)),
        BinaryOp::Smaller => Ok(EvalValue::Boolean(a < b)),
        BinaryOp::Eq => Ok(EvalValue::Boolean(a == b)),
        BinaryOp::NotEq => Ok(EvalValue::Boolean(a != b)),
    }
}

/// String operators. `None` means the operator is not defined on strings.
fn eval_string_binary(a: &str, b: &str, op: BinaryOp) -> Option<EvalValue> {
    match op {
        BinaryOp::Add => {
            let mut result = String::with_capacity(a.len().saturating_add(b.len()));
            result.push_str(a);
            result.push_str(b);
            Some(EvalValue::String(result))
        }
        BinaryOp::Eq => Some(EvalValue::Boolean(a == b)),
        BinaryOp::NotEq => Some(EvalValue::Boolean(a != b)),
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Greater
        | BinaryOp::Smaller => None,
    }
}
