//! Arithmetic operator evaluation

use crate::node::OperatorKind;
use crate::{EvalContext, EvalError, OverflowMode};

/// Apply `left + right`.
pub fn eval_add(left: i32, right: i32, ctx: &EvalContext) -> Result<i32, EvalError> {
    apply(OperatorKind::Add, ctx, left.wrapping_add(right), || {
        left.checked_add(right)
    })
}

/// Apply `left - right`.
pub fn eval_sub(left: i32, right: i32, ctx: &EvalContext) -> Result<i32, EvalError> {
    apply(OperatorKind::Sub, ctx, left.wrapping_sub(right), || {
        left.checked_sub(right)
    })
}

/// Apply `left * right`.
pub fn eval_mul(left: i32, right: i32, ctx: &EvalContext) -> Result<i32, EvalError> {
    apply(OperatorKind::Mul, ctx, left.wrapping_mul(right), || {
        left.checked_mul(right)
    })
}

/// Apply `left / right`, truncating toward zero.
///
/// A zero divisor is always an error. `i32::MIN / -1` wraps to `i32::MIN`
/// unless the context is checked.
pub fn eval_div(left: i32, right: i32, ctx: &EvalContext) -> Result<i32, EvalError> {
    if right == 0 {
        return Err(EvalError::DivisionByZero);
    }

    apply(OperatorKind::Div, ctx, left.wrapping_div(right), || {
        left.checked_div(right)
    })
}

fn apply(
    op: OperatorKind,
    ctx: &EvalContext,
    wrapped: i32,
    checked: impl FnOnce() -> Option<i32>,
) -> Result<i32, EvalError> {
    match ctx.overflow {
        OverflowMode::Wrapping => Ok(wrapped),
        OverflowMode::Checked => checked().ok_or(EvalError::IntegerOverflow { op }),
    }
}
