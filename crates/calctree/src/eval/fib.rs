//! Fibonacci operator evaluation

use crate::fibonacci::{checked_fibonacci, fibonacci};
use crate::node::OperatorKind;
use crate::{EvalContext, EvalError, OverflowMode};

/// Apply the Fibonacci operator to an already evaluated argument.
///
/// The argument may be negative (for example the result of a subtraction),
/// so its absolute value is used as the index.
pub fn eval_fib(arg: i32, ctx: &EvalContext) -> Result<i32, EvalError> {
    // unsigned_abs maps i32::MIN to 2^31 instead of overflowing
    let index = arg.unsigned_abs();

    if index > ctx.max_fibonacci_index {
        return Err(EvalError::FibonacciIndexTooLarge {
            index,
            limit: ctx.max_fibonacci_index,
        });
    }

    match ctx.overflow {
        OverflowMode::Wrapping => Ok(fibonacci(index)),
        OverflowMode::Checked => checked_fibonacci(index).ok_or(EvalError::IntegerOverflow {
            op: OperatorKind::Fib,
        }),
    }
}
