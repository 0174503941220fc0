//! Binary operator implementations for the evaluator.
//!
//! The operator set is closed, so dispatch is a direct `match`. Arithmetic
//! is checked: overflow is an `IntegerOverflow` error, never a panic or a
//! silent wrap. Division truncates toward zero.

use kiln_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, EvalResult};

/// Checked arithmetic operation with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult {
    result.ok_or_else(|| integer_overflow(op_name))
}

/// Truth value of a comparison: `1` or `0`.
#[inline]
fn truth(b: bool) -> i64 {
    i64::from(b)
}

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64) -> EvalResult {
    match op {
        // Arithmetic
        BinaryOp::Add => checked_arith(left.checked_add(right), "addition"),
        BinaryOp::Sub => checked_arith(left.checked_sub(right), "subtraction"),
        BinaryOp::Mul => checked_arith(left.checked_mul(right), "multiplication"),
        BinaryOp::Div => {
            if right == 0 {
                Err(division_by_zero())
            } else {
                // Only i64::MIN / -1 overflows.
                checked_arith(left.checked_div(right), "division")
            }
        }

        // Comparison
        BinaryOp::Lt => Ok(truth(left < right)),
        BinaryOp::Gt => Ok(truth(left > right)),
        BinaryOp::LtEq => Ok(truth(left <= right)),
        BinaryOp::GtEq => Ok(truth(left >= right)),
        BinaryOp::Eq => Ok(truth(left == right)),
        BinaryOp::Neq => Ok(truth(left != right)),
    }
}
