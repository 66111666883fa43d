//! Error types for calctree construction and evaluation

use thiserror::Error;

use crate::node::OperatorKind;
use crate::recurrence::Strategy;

/// Errors raised while building or evaluating an expression tree.
///
/// A failed evaluation never touches the tree it was evaluating; the error
/// simply propagates to the caller of [`evaluate`](crate::evaluate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A kind that is not an operator was used where an operator is required.
    #[error("Invalid node kind: `{kind}` is not an operator")]
    InvalidNodeKind {
        /// The offending kind
        kind: OperatorKind,
    },

    /// An operation was given the wrong set of children.
    #[error("Malformed `{kind}` node: {reason}")]
    MalformedTree {
        /// Kind of the node being built
        kind: OperatorKind,
        /// What was wrong with its children
        reason: String,
    },

    /// The tree is taller than the configured evaluation depth.
    #[error("Tree depth exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// The configured limit
        limit: usize,
    },

    /// Arithmetic overflowed while evaluating in checked mode.
    #[error("Integer overflow in `{op}`")]
    IntegerOverflow {
        /// Kind of the node that overflowed
        op: OperatorKind,
    },

    /// The Fibonacci index is larger than the configured table bound.
    #[error("Fibonacci index {index} exceeds the limit of {limit}")]
    FibonacciIndexTooLarge {
        /// Requested index (after taking the absolute value)
        index: u32,
        /// The configured limit
        limit: u32,
    },

    /// The recurrence index is beyond what the chosen strategy can handle.
    #[error("{strategy} cannot compute R({index}): the limit is {limit}")]
    RecurrenceIndexTooLarge {
        /// Strategy that was asked
        strategy: Strategy,
        /// Requested index
        index: u32,
        /// That strategy's limit
        limit: u32,
    },
}

/// Result type alias for calctree operations
pub type Result<T> = std::result::Result<T, EvalError>;
