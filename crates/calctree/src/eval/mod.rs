//! Expression evaluation

pub mod arith;
pub mod fib;

use crate::{EvalContext, EvalError, Node};

/// Trait for evaluating expression trees to integers.
///
/// This is the core abstraction for the tree-walking evaluator. Evaluation
/// borrows the tree, so it can be repeated any number of times and always
/// produces the same result.
pub trait Evaluate {
    /// Evaluate this tree with the given context.
    fn eval(&self, ctx: &EvalContext) -> Result<i32, EvalError>;
}

impl Evaluate for Node {
    fn eval(&self, ctx: &EvalContext) -> Result<i32, EvalError> {
        eval_node(self, ctx, 1)
    }
}

impl<T: Evaluate + ?Sized> Evaluate for Box<T> {
    fn eval(&self, ctx: &EvalContext) -> Result<i32, EvalError> {
        (**self).eval(ctx)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate `node`, which sits at `depth` in the tree (the root is 1).
///
/// Children are evaluated left to right before their parent combines them.
/// One frame per tree level; logging stays out of line in `trace_node`.
fn eval_node(node: &Node, ctx: &EvalContext, depth: usize) -> Result<i32, EvalError> {
    if depth > ctx.max_depth {
        return Err(EvalError::DepthLimitExceeded {
            limit: ctx.max_depth,
        });
    }

    let next = depth + 1;
    let value = match node {
        Node::Literal(value) => *value,

        Node::Add(left, right) => {
            arith::eval_add(eval_node(left, ctx, next)?, eval_node(right, ctx, next)?, ctx)?
        }
        Node::Sub(left, right) => {
            arith::eval_sub(eval_node(left, ctx, next)?, eval_node(right, ctx, next)?, ctx)?
        }
        Node::Mul(left, right) => {
            arith::eval_mul(eval_node(left, ctx, next)?, eval_node(right, ctx, next)?, ctx)?
        }
        Node::Div(left, right) => {
            arith::eval_div(eval_node(left, ctx, next)?, eval_node(right, ctx, next)?, ctx)?
        }

        Node::Fib(arg) => fib::eval_fib(eval_node(arg, ctx, next)?, ctx)?,
    };

    if ctx.trace {
        trace_node(node, depth, value);
    }

    Ok(value)
}

#[inline(never)]
fn trace_node(node: &Node, depth: usize, value: i32) {
    tracing::trace!(kind = %node.kind(), depth, value, "evaluated node");
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a tree with the default context.
pub fn evaluate(root: &Node) -> Result<i32, EvalError> {
    evaluate_with(root, &EvalContext::default())
}

/// Evaluate a tree with an explicit context.
pub fn evaluate_with(root: &Node, ctx: &EvalContext) -> Result<i32, EvalError> {
    root.eval(ctx)
        .inspect_err(|e| tracing::debug!(root = %root.kind(), error = %e, "evaluation failed"))
}

/// Evaluate a tree with the default context (alias of [`evaluate`]).
pub fn calc(root: &Node) -> Result<i32, EvalError> {
    evaluate(root)
}
